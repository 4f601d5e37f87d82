//! WebGL2 program and mesh for the waves material.

use glam::Mat4;
use js_sys::{Float32Array, Uint32Array};
use wasm_bindgen::JsValue;
use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use crate::mesh::PlaneGeometry;
use crate::shaders;
use crate::uniforms::{Uniform, UniformValue, WaveUniforms};

fn js_err(message: &str) -> JsValue {
    JsValue::from_str(message)
}

/// Linked waves program with its uniform locations cached up front.
pub struct WavesProgram {
    program: WebGlProgram,
    // Indexed like `Uniform::ALL`; `None` when the driver optimised a slot out.
    uniforms: Vec<Option<WebGlUniformLocation>>,
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
}

impl WavesProgram {
    pub fn new(gl: &GL) -> Result<Self, JsValue> {
        let program = link_program(gl, &shaders::vertex_source(), &shaders::fragment_source())?;
        let uniforms = Uniform::ALL
            .iter()
            .map(|u| gl.get_uniform_location(&program, u.glsl_name()))
            .collect::<Vec<_>>();
        for (u, loc) in Uniform::ALL.iter().zip(&uniforms) {
            if loc.is_none() {
                log::warn!("uniform {} is inactive", u.glsl_name());
            }
        }

        Ok(Self {
            model: gl.get_uniform_location(&program, "modelMatrix"),
            view: gl.get_uniform_location(&program, "viewMatrix"),
            projection: gl.get_uniform_location(&program, "projectionMatrix"),
            uniforms,
            program,
        })
    }

    pub fn bind(&self, gl: &GL) {
        gl.use_program(Some(&self.program));
    }

    /// Upload every uniform. Expects the program to be bound.
    pub fn upload(&self, gl: &GL, values: &WaveUniforms) {
        for ((_, value), loc) in values.iter().zip(&self.uniforms) {
            let Some(loc) = loc else { continue };
            match value {
                UniformValue::Float(v) => gl.uniform1f(Some(loc), v),
                UniformValue::Vec2(v) => gl.uniform2f(Some(loc), v.x, v.y),
                UniformValue::Vec3(v) => gl.uniform3f(Some(loc), v.x, v.y, v.z),
            }
        }
    }

    pub fn set_matrices(&self, gl: &GL, model: &Mat4, view: &Mat4, projection: &Mat4) {
        for (loc, m) in [(&self.model, model), (&self.view, view), (&self.projection, projection)] {
            gl.uniform_matrix4fv_with_f32_array(loc.as_ref(), false, &m.to_cols_array());
        }
    }
}

/// Plane vertices and indices living on the GPU.
pub struct PlaneMesh {
    vao: WebGlVertexArrayObject,
    _positions: WebGlBuffer,
    _indices: WebGlBuffer,
    index_count: i32,
}

impl PlaneMesh {
    pub fn upload(gl: &GL, geometry: &PlaneGeometry) -> Result<Self, JsValue> {
        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| js_err("failed to create plane VAO"))?;
        gl.bind_vertex_array(Some(&vao));

        let positions = gl
            .create_buffer()
            .ok_or_else(|| js_err("failed to create position buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&positions));
        let data = Float32Array::from(geometry.positions().as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);
        gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, 0, 0);
        gl.enable_vertex_attrib_array(0);

        let indices = gl
            .create_buffer()
            .ok_or_else(|| js_err("failed to create index buffer"))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        let index_data = geometry.indices();
        let index_count = index_data.len() as i32;
        let data = Uint32Array::from(index_data.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &data, GL::STATIC_DRAW);

        gl.bind_vertex_array(None);
        log::debug!(
            "plane uploaded: {} vertices, {} indices",
            geometry.vertex_count(),
            index_count
        );

        Ok(Self {
            vao,
            _positions: positions,
            _indices: indices,
            index_count,
        })
    }

    pub fn draw(&self, gl: &GL) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, self.index_count, GL::UNSIGNED_INT, 0);
        gl.bind_vertex_array(None);
    }
}

fn link_program(gl: &GL, vertex_src: &str, fragment_src: &str) -> Result<WebGlProgram, JsValue> {
    let vertex_shader = compile_shader(gl, GL::VERTEX_SHADER, vertex_src)?;
    let fragment_shader = compile_shader(gl, GL::FRAGMENT_SHADER, fragment_src)?;
    let program = gl
        .create_program()
        .ok_or_else(|| js_err("failed to create program"))?;
    gl.attach_shader(&program, &vertex_shader);
    gl.attach_shader(&program, &fragment_shader);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    gl.detach_shader(&program, &vertex_shader);
    gl.detach_shader(&program, &fragment_shader);
    gl.delete_shader(Some(&vertex_shader));
    gl.delete_shader(Some(&fragment_shader));

    if linked {
        Ok(program)
    } else {
        let info = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown program error".to_string());
        log::error!("waves program failed to link: {}", info);
        Err(js_err(&format!("failed to link program: {}", info)))
    }
}

fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or_else(|| js_err("failed to create shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let info = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown shader error".to_string());
        log::error!("shader failed to compile: {}", info);
        Err(js_err(&format!("failed to compile shader: {}", info)))
    }
}
