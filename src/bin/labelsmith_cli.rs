//! LabelSmith CLI - file-and-flag front end for the customizer core
//!
//! Commands: customize, suggest
//! Outputs JSON to stdout
//! Returns non-zero on failure

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use labelsmith_core::{
    customize, palette, suggest_palette, ColorParseError, ColorTriple, CustomizeRequest,
    FontAsset, HexColor, OpenAiChat, Template,
};

#[derive(Parser)]
#[command(name = "labelsmith-cli")]
#[command(about = "LabelSmith CLI - SVG label customizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Customize a template with logo text, a curved name, and brand colors
    Customize {
        /// Path to the SVG template
        #[arg(short, long)]
        template: PathBuf,

        /// Path to the font file (OTF/TTF)
        #[arg(short, long)]
        font: PathBuf,

        /// Logo phrase (max 2 words; extras are dropped with a warning)
        #[arg(short, long, default_value = "")]
        logo: String,

        /// Name rendered along the arc
        #[arg(short, long, default_value = "")]
        name: String,

        /// Main color, replaces #A8D48C
        #[arg(long, default_value = "#A8D48C")]
        main_color: String,

        /// Secondary color, replaces #88A585
        #[arg(long, default_value = "#88A585")]
        secondary_color: String,

        /// Logo/main text color
        #[arg(long, default_value = "#F5457F")]
        text_color: String,

        /// Output path (defaults to the download file name)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Suggest a palette for a flavor via the chat model
    Suggest {
        /// Flavor phrase the palette should match
        #[arg(short, long)]
        flavor: String,

        /// API key (falls back to the OPENAI_API_KEY environment variable)
        #[arg(long)]
        api_key: Option<String>,

        /// Chat model to ask
        #[arg(long, default_value = palette::DEFAULT_MODEL)]
        model: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Customize {
            template,
            font,
            logo,
            name,
            main_color,
            secondary_color,
            text_color,
            out,
        } => {
            let colors = match parse_colors(&main_color, &secondary_color, &text_color) {
                Ok(colors) => colors,
                Err(e) => {
                    println!(r#"{{"success": false, "error": "{}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let template = match fs::read_to_string(&template) {
                Ok(text) => Template::new(text),
                Err(e) => {
                    eprintln!(
                        r#"{{"error": "Failed to read template {}: {}"}}"#,
                        template.display(),
                        e
                    );
                    return ExitCode::FAILURE;
                }
            };

            let font = match fs::read(&font) {
                Ok(bytes) => FontAsset::new(bytes),
                Err(e) => {
                    eprintln!(
                        r#"{{"error": "Failed to read font {}: {}"}}"#,
                        font.display(),
                        e
                    );
                    return ExitCode::FAILURE;
                }
            };

            let request = CustomizeRequest {
                logo_phrase: logo,
                name_string: name,
                colors,
            };

            let asset = customize(&template, &font, &request);
            let exported = labelsmith_core::export(&asset);

            let out_path = out.unwrap_or_else(|| PathBuf::from(&exported.filename));
            if let Err(e) = fs::write(&out_path, asset.svg.as_bytes()) {
                eprintln!(
                    r#"{{"error": "Failed to write {}: {}"}}"#,
                    out_path.display(),
                    e
                );
                return ExitCode::FAILURE;
            }

            let manifest = serde_json::json!({
                "success": true,
                "id": asset.id,
                "created_at": asset.created_at,
                "engine_version": asset.engine_version,
                "output": out_path,
                "filename": exported.filename,
                "mime": exported.mime,
                "size_bytes": exported.size_bytes,
                "hash": exported.hash,
                "warnings": asset.warnings,
            });
            println!("{}", serde_json::to_string_pretty(&manifest).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Suggest {
            flavor,
            api_key,
            model,
        } => {
            let key = api_key
                .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                .unwrap_or_default();

            let client = match OpenAiChat::new(key) {
                Ok(client) => client.with_model(model),
                Err(e) => {
                    println!(r#"{{"success": false, "error": "{}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match suggest_palette(&client, &flavor, &ColorTriple::default()) {
                Ok(suggested) => {
                    let output = serde_json::json!({
                        "success": true,
                        "mainColor": suggested.main,
                        "secondaryColor": suggested.secondary,
                        "textColor": suggested.text,
                    });
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    let output = serde_json::json!({
                        "success": false,
                        "error": e.to_string(),
                    });
                    println!("{}", serde_json::to_string(&output).unwrap());
                    ExitCode::from(2)
                }
            }
        }
    }
}

fn parse_colors(
    main: &str,
    secondary: &str,
    text: &str,
) -> Result<ColorTriple, ColorParseError> {
    Ok(ColorTriple {
        main: HexColor::parse(main)?,
        secondary: HexColor::parse(secondary)?,
        text: HexColor::parse(text)?,
    })
}
