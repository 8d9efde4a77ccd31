mod demo;

use anyhow::{Context, Result};
use ptml_config::Config;
use ptml_engine::{Document, KindTable, RenderOptions};
use std::{
    env,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process,
};

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions::default()
        .indent(config.indent.clone())
        .escape_id(config.escape_id)
        .trailing_newline(config.trailing_newline)
}

fn write_document(doc: &Document, path: &Path, options: &RenderOptions) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    doc.write_to(&mut writer, options)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;

    log::info!("Wrote {} nodes to {}", doc.len(), path.display());
    Ok(())
}

fn load_config(program: &str) -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program} [output-path]");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ptml");

    let config = match args.len() {
        1 => load_config(program),
        2 => Config {
            output_path: PathBuf::from(&args[1]),
            ..load_config(program)
        },
        _ => {
            eprintln!("Usage: {program} [output-path]");
            process::exit(1);
        }
    };

    let doc = demo::build(&KindTable::bootstrap())?;
    write_document(&doc, &config.output_path, &render_options(&config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_render_options_follow_config() {
        let config = Config {
            indent: "  ".to_string(),
            escape_id: false,
            trailing_newline: false,
            ..Config::default()
        };
        let options = render_options(&config);

        assert_eq!(options.indent, "  ");
        assert!(!options.escape_id);
        assert!(!options.trailing_newline);
    }

    #[test]
    fn test_write_document_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site/public/index.html");
        let doc = demo::build(&KindTable::bootstrap()).unwrap();

        write_document(&doc, &path, &RenderOptions::default()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<html>\n"));
        assert!(written.ends_with("</html>\n"));
    }

    #[test]
    fn test_written_file_matches_rendered_string() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("index.html");
        let doc = demo::build(&KindTable::bootstrap()).unwrap();
        let options = RenderOptions::default().trailing_newline(false);

        write_document(&doc, &path, &options).unwrap();

        let root = doc.root().unwrap();
        let expected: String = doc.render_with(root, &options).collect();
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }
}
