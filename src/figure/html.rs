use std::path::Path;

use log::debug;

use super::{Figure, FigureError};

/// plotly.js bundle referenced by default
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Where the exported page loads plotly.js from.
///
/// The default is the CDN, so the page needs network access when opened;
/// use [`PlotlyScript::Inline`] (or [`PlotlyScript::from_file`]) for a page
/// that renders offline.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotlyScript {
    /// `<script src=...>`; needs network access when opened
    Cdn(String),
    /// Bundle source embedded in the page; renders offline
    Inline(String),
}

impl Default for PlotlyScript {
    fn default() -> Self {
        PlotlyScript::Cdn(PLOTLY_CDN_URL.to_string())
    }
}

impl PlotlyScript {
    /// Inline a local plotly.js bundle
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FigureError> {
        Ok(PlotlyScript::Inline(std::fs::read_to_string(path)?))
    }

    fn to_tag(&self) -> String {
        match self {
            PlotlyScript::Cdn(url) => {
                format!("<script src=\"{}\" charset=\"utf-8\"></script>", escape_html(url))
            }
            PlotlyScript::Inline(source) => {
                format!("<script>{}</script>", source.replace("</script", "<\\/script"))
            }
        }
    }
}

/// Self-contained HTML page embedding one figure definition
#[derive(Debug, Clone, PartialEq)]
pub struct StandaloneHtml {
    title: String,
    script: PlotlyScript,
    div_id: String,
}

impl StandaloneHtml {
    /// Page with the given title, plotly.js from the CDN
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            script: PlotlyScript::default(),
            div_id: "chart".to_string(),
        }
    }

    /// Choose where plotly.js comes from
    pub fn with_script(mut self, script: PlotlyScript) -> Self {
        self.script = script;
        self
    }

    /// Id of the chart container element
    pub fn with_div_id(mut self, div_id: &str) -> Self {
        self.div_id = div_id.to_string();
        self
    }

    /// Render the page
    pub fn render(&self, figure: &Figure) -> Result<String, FigureError> {
        // "<" escaped so the payload can never close its script element
        let json = figure.to_json()?.replace('<', "\\u003c");
        let div_id = escape_html(&self.div_id);
        let div_id_js = serde_json::to_string(&self.div_id)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
{script}
</head>
<body>
<div id="{div_id}" style="width:100%;height:95vh;"></div>
<script type="application/json" id="{div_id}-figure">{json}</script>
<script>
(function () {{
  var id = {div_id_js};
  var figure = JSON.parse(document.getElementById(id + "-figure").textContent);
  Plotly.newPlot(id, figure.data, figure.layout, {{responsive: true}});
}})();
</script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            script = self.script.to_tag(),
        ))
    }

    /// Render the page and write it to `path`
    pub fn write<P: AsRef<Path>>(&self, figure: &Figure, path: P) -> Result<(), FigureError> {
        let path = path.as_ref();
        let html = self.render(figure)?;
        std::fs::write(path, &html)?;
        debug!("Wrote {} ({} bytes)", path.display(), html.len());
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
