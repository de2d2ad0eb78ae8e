//! LabelSmith Core - Label Production Engine
//!
//! Takes an uploaded SVG label template plus a font file, injects a short
//! logo phrase and a curved name string, recolors the two brand
//! placeholders, and hands back a downloadable document. An optional
//! collaborator asks a chat model to suggest a palette from a free-text
//! flavor description.

pub mod export;
pub mod markup;
pub mod palette;
pub mod pipeline;
pub mod template;
pub mod validation;

pub use export::{export, preview_data_uri, SvgExport, DOWNLOAD_FILENAME, SVG_MIME};
pub use palette::{suggest_palette, ChatCompletion, OpenAiChat, PaletteError};
pub use pipeline::{customize, CustomizeRequest, CustomizedSvg};
pub use template::{FontAsset, Template};
pub use validation::{ColorParseError, ColorTriple, HexColor, Warning};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
