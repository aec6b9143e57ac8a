//! `afnor`: look up AFNOR keycode aliases from the command line.

mod format;

use std::path::PathBuf;
use std::process::ExitCode;

use afnor::layer::Layer;
use afnor::lookup::{by_name, entries, from_char, glyph_of};
use afnor::text::strokes;
use afnor::{AFNOR_KEYS, SHADOWED, check_layout};
use afnor_config::KeymapConfig;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use crate::format::{RowJson, action_name, key_name, printable, qmk_expr, row_text};

/// French AZERTY (AFNOR NF Z71-300) keycode aliases
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the alias table
    Show {
        /// Only this layer
        #[arg(short, long, value_enum)]
        layer: Option<LayerArg>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also print the shadowed definitions
        #[arg(long)]
        shadowed: bool,
    },
    /// Look up an `FR_*` name or a single character
    Lookup {
        #[arg(value_name = "NAME_OR_CHAR")]
        query: String,
    },
    /// Print the keystrokes that type TEXT on an AFNOR host
    Type {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Check the consistency of the alias table
    Check,
    /// Resolve a keymap.toml file and print its layers
    Keymap {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Print QMK keycodes instead of names
        #[arg(long)]
        qmk: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LayerArg {
    Base,
    Shift,
    Altgr,
    ShiftAltgr,
}

impl From<LayerArg> for Layer {
    fn from(layer: LayerArg) -> Self {
        match layer {
            LayerArg::Base => Layer::Base,
            LayerArg::Shift => Layer::Shift,
            LayerArg::Altgr => Layer::AltGr,
            LayerArg::ShiftAltgr => Layer::ShiftAltGr,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    debug!("{:?}", cli.command);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Show { layer, json, shadowed } => show(layer.map(Layer::from), json, shadowed),
        Command::Lookup { query } => lookup(&query),
        Command::Type { text } => type_text(&text),
        Command::Check => {
            check_layout().map_err(|e| anyhow::anyhow!("{}", e))?;
            println!(
                "ok: {} bindings, {} shadowed definitions",
                AFNOR_KEYS.len(),
                SHADOWED.len()
            );
            Ok(())
        }
        Command::Keymap { path, qmk } => keymap(path, qmk),
    }
}

fn show(layer: Option<Layer>, json: bool, shadowed: bool) -> Result<()> {
    let layers: Vec<Layer> = match layer {
        Some(layer) => vec![layer],
        None => Layer::ALL.to_vec(),
    };

    if json {
        let rows: Vec<RowJson> = layers.iter().flat_map(|l| entries(*l)).map(RowJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows).context("serializing the table")?);
        return Ok(());
    }

    for layer in layers {
        for key in entries(layer) {
            println!("{}", row_text(key));
        }
    }
    if shadowed {
        println!();
        for s in SHADOWED {
            println!("{:<8} {:<18} {}  ({:?})", s.name, qmk_expr(s.action), s.glyph, s.reason);
        }
    }
    Ok(())
}

fn lookup(query: &str) -> Result<()> {
    if let Some(key) = by_name(query) {
        println!("{}", row_text(key));
        return Ok(());
    }
    if let Some(s) = SHADOWED.iter().find(|s| s.name == query) {
        println!(
            "{} is not defined ({:?}), {} prints {}",
            s.name,
            s.reason,
            qmk_expr(s.action),
            printable(&s.glyph.to_string())
        );
        return Ok(());
    }

    let mut chars = query.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        bail!("'{}' is neither an FR_* name nor a single character", query);
    };
    let action = from_char(c).with_context(|| format!("no key prints '{}' on an AFNOR host", printable(query)))?;
    let glyph = glyph_of(action).map(|g| g.to_string()).unwrap_or_default();
    println!("{:<8} {:<18} {}", action_name(action), qmk_expr(action), printable(&glyph));
    Ok(())
}

fn type_text(text: &str) -> Result<()> {
    let mut unmappable = Vec::new();
    for stroke in strokes(text) {
        match stroke {
            Ok(stroke) => println!(
                "{:<16} {:#010b} {}",
                key_name(stroke.key),
                stroke.modifiers.into_bits(),
                stroke.layer().map_or("-", |l| l.name())
            ),
            Err(e) => {
                eprintln!("{}", e);
                unmappable.push(e);
            }
        }
    }
    if !unmappable.is_empty() {
        bail!("{} characters can't be typed", unmappable.len());
    }
    Ok(())
}

fn keymap(path: PathBuf, qmk: bool) -> Result<()> {
    let keymap = KeymapConfig::load(&path).with_context(|| format!("loading {}", path.display()))?;
    for (number, layer) in keymap.keymap.iter().enumerate() {
        println!("[{}]", keymap.layer_label(number));
        for row in layer {
            let cells: Vec<String> = row
                .iter()
                .map(|action| {
                    if qmk {
                        format!("{:#06X}", afnor::qmk::to_qmk_keycode(*action))
                    } else {
                        action_name(*action)
                    }
                })
                .collect();
            println!("  {}", cells.join(" "));
        }
    }
    Ok(())
}
