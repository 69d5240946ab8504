//! Renders a [`ProfileRecord`] into a standalone HTML page.
//!
//! Rendering is a single pass over the record: fixed preamble, escaped field
//! substitutions, one fragment per specialty and per experience entry, fixed
//! suffix. It never performs I/O and never fails.

pub mod markup;

use crate::profile::ProfileRecord;
use markup::MarkupBuilder;
use std::fmt;

pub use markup::escape_html;

const STYLES: &str = "<style>
body{font-family:Arial,Helvetica,sans-serif;background:#f7f9fb;margin:0;padding:24px;color:#0f172a}
.container{max-width:900px;margin:0 auto;background:#fff;padding:20px;border-radius:12px}
h1{margin-top:0}
.exp-card{border-top:1px solid #e2e8f0;padding:8px 0}
.exp-card h3{margin:8px 0 4px}
.closing{margin-top:24px;font-style:italic}
</style>
";

/// Page-level knobs that do not come from the profile itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Script source inlined before `</body>`.
    pub inline_script: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            inline_script: None,
        }
    }
}

/// A rendered HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders the profile with default options.
pub fn render(profile: &ProfileRecord) -> Document {
    render_with(profile, &RenderOptions::default())
}

pub fn render_with(profile: &ProfileRecord, options: &RenderOptions) -> Document {
    let mut html = MarkupBuilder::with_capacity(estimate_capacity(profile));

    html.raw("<!doctype html>\n<html lang=\"")
        .text(&options.lang)
        .raw("\">\n<head>\n<meta charset=\"utf-8\">\n")
        .raw("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n")
        .element("<title>", &profile.name, " — Profile</title>\n")
        .raw(STYLES)
        .raw("</head>\n<body>\n<div class=\"container\">\n");

    html.raw("<header class=\"section hero\">\n")
        .element("<h1>", &profile.name, "</h1>\n")
        .element("<p><strong>", &profile.headline, "</strong></p>\n")
        .element("<p>", &profile.summary, "</p>\n")
        .raw("</header>\n");

    let contact = &profile.contact;
    html.raw("<section class=\"section\" id=\"contact\">\n<h2>Contact</h2>\n<ul>\n")
        .element("<li>Email: ", &contact.email, "</li>\n")
        .element("<li>Phone: ", &contact.phone, "</li>\n")
        .element("<li>Location: ", &contact.location, "</li>\n")
        .raw("</ul>\n</section>\n");

    html.raw("<section class=\"section\" id=\"specialties\">\n<h2>Specialties</h2>\n<ul>\n");
    for specialty in &profile.specialties {
        html.element("<li>", specialty, "</li>\n");
    }
    html.raw("</ul>\n</section>\n");

    html.raw("<section class=\"section\" id=\"experience\">\n<h2>Experience</h2>\n");
    for entry in &profile.experience {
        html.raw("<article class=\"exp-card\">\n")
            .element("<h3>", &entry.role, " — ")
            .text(&entry.company)
            .raw("</h3>\n")
            .element("<p>", &entry.period, " | ")
            .text(entry.location_or_empty())
            .raw("</p>\n")
            .element("<p>", &entry.details, "</p>\n")
            .raw("</article>\n");
    }
    html.raw("</section>\n");

    html.element(
        "<p class=\"closing\">",
        profile.closing.as_deref().unwrap_or_default(),
        "</p>\n",
    )
    .raw("</div>\n");

    if let Some(script) = &options.inline_script {
        html.raw("<script>\n").script(script).raw("\n</script>\n");
    }
    html.raw("</body>\n</html>\n");

    Document(html.finish())
}

fn estimate_capacity(profile: &ProfileRecord) -> usize {
    let fields = profile.name.len() * 2
        + profile.headline.len()
        + profile.summary.len()
        + profile.specialties.iter().map(|s| s.len() + 16).sum::<usize>()
        + profile
            .experience
            .iter()
            .map(|e| e.role.len() + e.company.len() + e.details.len() + 96)
            .sum::<usize>();
    STYLES.len() + 1024 + fields
}
