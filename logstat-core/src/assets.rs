use rust_embed::RustEmbed;

/// Files shipped inside the binary: the default report template and the
/// config written by `logstat config init`.
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct Templates;

impl Templates {
    /// Fetch an embedded template as UTF-8 text.
    pub fn text(name: &str) -> Option<String> {
        let file = Self::get(name)?;
        String::from_utf8(file.data.into_owned()).ok()
    }
}
