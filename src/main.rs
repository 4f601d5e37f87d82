//! Host-side helper.
//!
//! `waves serve` (the default) builds the WASM site into `static/pkg` and
//! serves `static/` locally. `waves snapshot` renders the scene on the CPU
//! and writes a PNG.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::path::PathBuf;
    use std::process::{Command, Stdio};
    use std::{thread, time::Duration};

    use anyhow::{anyhow, bail, Context, Result};
    use waves_wasm::{snapshot, WavesConfig, WavesScene};

    const PORT: u16 = 8000;

    #[derive(Debug, PartialEq)]
    struct SnapshotArgs {
        out: PathBuf,
        width: u32,
        height: u32,
        config: Option<PathBuf>,
        time: Option<f32>,
    }

    fn parse_size(raw: &str) -> Result<(u32, u32)> {
        let (w, h) = raw
            .split_once('x')
            .ok_or_else(|| anyhow!("size must look like 800x600, got {raw:?}"))?;
        Ok((w.parse()?, h.parse()?))
    }

    fn parse_snapshot_args(args: &[String]) -> Result<SnapshotArgs> {
        let mut parsed = SnapshotArgs {
            out: PathBuf::from("waves.png"),
            width: 800,
            height: 600,
            config: None,
            time: None,
        };
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let mut value = |flag: &str| {
                iter.next()
                    .cloned()
                    .ok_or_else(|| anyhow!("{flag} needs a value"))
            };
            match arg.as_str() {
                "--size" => (parsed.width, parsed.height) = parse_size(&value("--size")?)?,
                "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
                "--time" => parsed.time = Some(value("--time")?.parse().context("--time")?),
                flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
                path => parsed.out = PathBuf::from(path),
            }
        }
        Ok(parsed)
    }

    fn snapshot(args: &[String]) -> Result<()> {
        let args = parse_snapshot_args(args)?;
        let config = match &args.config {
            Some(path) => WavesConfig::load(path)?,
            None => WavesConfig::default(),
        };
        let mut scene = WavesScene::from_config(&config);
        if let Some(t) = args.time {
            scene.uniforms.time = t;
        }
        snapshot::save_png(&scene, args.width, args.height, &args.out)?;
        println!("wrote {}", args.out.display());
        Ok(())
    }

    fn serve() -> Result<()> {
        // 1. Build wasm bundle into static/pkg
        println!("Building WASM pkg …");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(st) if st.success() => {}
            Ok(_) => bail!(
                "wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/)."
            ),
            Err(_) => {
                log::warn!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
            }
        }

        // 2. Start simple HTTP server serving `static/`
        println!("Launching local server at http://127.0.0.1:{PORT} …");
        let _server = Command::new("python3")
            .args(["-m", "http.server", &PORT.to_string(), "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("failed to start http server")?;

        // Keep process alive
        loop {
            thread::sleep(Duration::from_secs(60));
        }
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args: Vec<String> = std::env::args().skip(1).collect();
        match args.first().map(String::as_str) {
            None | Some("serve") => serve(),
            Some("snapshot") => snapshot(&args[1..]),
            Some(other) => bail!("unknown command {other:?}; expected `serve` or `snapshot`"),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn strings(args: &[&str]) -> Vec<String> {
            args.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn snapshot_defaults() {
            let args = parse_snapshot_args(&[]).unwrap();
            assert_eq!(args.out, PathBuf::from("waves.png"));
            assert_eq!((args.width, args.height), (800, 600));
            assert!(args.config.is_none() && args.time.is_none());
        }

        #[test]
        fn snapshot_flags() {
            let args = parse_snapshot_args(&strings(&[
                "out.png", "--size", "320x200", "--time", "1.5", "--config", "p.json",
            ]))
            .unwrap();
            assert_eq!(args.out, PathBuf::from("out.png"));
            assert_eq!((args.width, args.height), (320, 200));
            assert_eq!(args.time, Some(1.5));
            assert_eq!(args.config, Some(PathBuf::from("p.json")));
        }

        #[test]
        fn snapshot_rejects_bad_input() {
            assert!(parse_snapshot_args(&strings(&["--size", "big"])).is_err());
            assert!(parse_snapshot_args(&strings(&["--time"])).is_err());
            assert!(parse_snapshot_args(&strings(&["--fast"])).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    host::run()
}

// The browser entry point lives in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
