use anyhow::{Context, Result};
use listing_composer_config::Config;
use listing_composer_engine::catalog::{AVAILABLE_BULLETS, AVAILABLE_ICONS};
use listing_composer_engine::{ArticleData, BlockType, LayoutTemplate, io, render};
use std::path::{Path, PathBuf};
use std::{env, process};

const USAGE: &str = "Usage:
  listing-composer render <article.json> [output.html]
  listing-composer demo [output.json]
  listing-composer layout <output.json>
  listing-composer blocks
  listing-composer init <output_dir>";

enum Command {
    Render {
        article: PathBuf,
        output: Option<PathBuf>,
    },
    Demo {
        output: Option<PathBuf>,
    },
    Layout {
        output: PathBuf,
    },
    Blocks,
    Init {
        output_dir: PathBuf,
    },
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        let arg = |i: usize| args.get(i).map(PathBuf::from);
        match args.first().map(String::as_str)? {
            "render" if (2..=3).contains(&args.len()) => Some(Command::Render {
                article: arg(1)?,
                output: arg(2),
            }),
            "demo" if args.len() <= 2 => Some(Command::Demo { output: arg(1) }),
            "layout" if args.len() == 2 => Some(Command::Layout { output: arg(1)? }),
            "blocks" if args.len() == 1 => Some(Command::Blocks),
            "init" if args.len() == 2 => Some(Command::Init {
                output_dir: arg(1)?,
            }),
            _ => None,
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        process::exit(2);
    };

    if let Err(e) = run(command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { article, output } => render_article(&article, output),
        Command::Demo { output } => {
            let demo = ArticleData::demo();
            match output {
                Some(path) => {
                    io::write_article(&path, &demo)?;
                    log::info!("Wrote demo article to {}", path.display());
                }
                None => println!("{}", demo.to_json()?),
            }
            Ok(())
        }
        Command::Layout { output } => {
            io::write_layout(&output, &LayoutTemplate::standard())?;
            log::info!("Wrote standard layout to {}", output.display());
            Ok(())
        }
        Command::Blocks => {
            print!("{}", catalog_listing());
            Ok(())
        }
        Command::Init { output_dir } => {
            let path = Config::default_path();
            Config::init(&path, output_dir)?;
            log::info!("Wrote starter config to {}", path.display());
            Ok(())
        }
    }
}

fn catalog_listing() -> String {
    let mut out = String::new();
    for block_type in BlockType::ALL {
        out.push_str(&format!(
            "{} {:<14} {}\n",
            block_type.default_icon(),
            block_type.display_name(),
            block_type.input_label()
        ));
    }
    out.push_str(&format!("\nIcons:   {}\n", AVAILABLE_ICONS.join(" ")));
    out.push_str(&format!("Bullets: {}\n", AVAILABLE_BULLETS.join(" ")));
    out
}

fn render_article(article_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let article = io::read_article(article_path)
        .with_context(|| format!("Could not import {}", article_path.display()))?;

    for id in article.unused_block_ids() {
        log::warn!("Content for `{id}` has no matching block and will not be rendered");
    }

    let html = render(&article);

    let target = match output {
        Some(path) => Some(path),
        None => Config::load()?.map(|config| {
            let file_name = article.generate_file_name(&config.default_extension);
            config.output_path(&file_name)
        }),
    };

    match target {
        Some(path) => {
            io::write_html(&path, &html)?;
            log::info!("Rendered {} to {}", article_path.display(), path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
