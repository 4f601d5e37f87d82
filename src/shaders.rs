//! GLSL ES 3.00 sources for the waves program.
//!
//! The noise library is spliced in after the header of each stage, so both
//! stages can call `perlin`.

const HEADER: &str = "#version 300 es\nprecision highp float;\n";
const NOISE: &str = include_str!("shaders/noise.glsl");
const VERTEX_BODY: &str = include_str!("shaders/waves.vert");
const FRAGMENT_BODY: &str = include_str!("shaders/waves.frag");

fn assemble(body: &str) -> String {
    let mut src = String::with_capacity(HEADER.len() + NOISE.len() + body.len() + 1);
    src.push_str(HEADER);
    src.push_str(NOISE);
    src.push('\n');
    src.push_str(body);
    src
}

pub fn vertex_source() -> String {
    assemble(VERTEX_BODY)
}

pub fn fragment_source() -> String {
    assemble(FRAGMENT_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniforms::Uniform;

    #[test]
    fn version_directive_comes_first() {
        assert!(vertex_source().starts_with("#version 300 es\n"));
        assert!(fragment_source().starts_with("#version 300 es\n"));
    }

    #[test]
    fn every_uniform_is_declared_in_some_stage() {
        let vs = vertex_source();
        let fs = fragment_source();
        for uniform in Uniform::ALL {
            let name = uniform.glsl_name();
            let declared = |src: &str| {
                src.lines().any(|l| l.starts_with("uniform ") && l.trim_end().ends_with(&format!(" {name};")))
            };
            assert!(declared(&vs) || declared(&fs), "{name} not declared");
        }
    }

    #[test]
    fn stages_agree_on_varyings() {
        let vs = vertex_source();
        let fs = fragment_source();
        for (ty, name) in [("vec4", "v_modelPosition"), ("float", "v_elevation"), ("float", "v_foldElevation")] {
            assert!(vs.contains(&format!("out {ty} {name};")), "{name} missing from vertex stage");
            assert!(fs.contains(&format!("in {ty} {name};")), "{name} missing from fragment stage");
        }
    }
}
