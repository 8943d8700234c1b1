//! Canon CLI - Render buttons from the command line.
//!
//! Output is JSON so other tooling can consume it.

use canon_core::{to_html, Button, ButtonProps, CanonStyle, Node};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;

#[derive(Parser)]
#[command(name = "canon")]
#[command(about = "Canon button renderer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single button
    Render {
        /// Style variant (unrecognized names render a bare button)
        #[arg(short, long, default_value = "none")]
        style: String,
        /// Button text
        #[arg(short, long, default_value = "")]
        text: String,
        /// Element id
        #[arg(long)]
        id: Option<String>,
        /// Extra classes
        #[arg(short, long)]
        class: Option<String>,
        /// Render the button disabled
        #[arg(long)]
        disabled: bool,
        /// Render the button hidden
        #[arg(long)]
        hidden: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// List style variants and their classes
    Styles,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

/// Response envelope printed by every command.
#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }

    fn print(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Failed to encode response: {}", e),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            style,
            text,
            id,
            class,
            disabled,
            hidden,
            format,
        } => {
            let mut props = ButtonProps::new()
                .canon_style(style.as_str())
                .enabled(!disabled)
                .hidden(hidden);
            if !text.is_empty() {
                props = props.text(text);
            }
            if let Some(id) = id {
                props = props.id(id);
            }
            if let Some(class) = class {
                props = props.class_name(class);
            }
            handle_render(props, format);
        }
        Commands::Styles => handle_styles(),
    }
}

fn handle_render(props: ButtonProps, format: Format) {
    let style = props.canon_style;
    let node: Node = Button::render(props).into();

    match format {
        Format::Html => ApiResponse::ok(json!({
            "style": style,
            "html": to_html(&node),
            "text": node.text_content(),
        }))
        .print(),
        Format::Json => match serde_json::to_value(&node) {
            Ok(tree) => ApiResponse::ok(json!({
                "style": style,
                "tree": tree,
            }))
            .print(),
            Err(e) => ApiResponse::<()>::err(e.to_string()).print(),
        },
    }
}

fn handle_styles() {
    let styles: Vec<_> = CanonStyle::ALL
        .iter()
        .map(|style| {
            json!({
                "name": style.as_str(),
                "classes": style.classes(),
                "icon": style.is_icon(),
                "decorated": style.is_decorated(),
            })
        })
        .collect();

    ApiResponse::ok(json!({ "styles": styles })).print();
}
