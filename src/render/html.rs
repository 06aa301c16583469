use crate::render::chart::Figure;

/// Render a self-contained HTML page, one plotly chart per figure.
///
/// Important: we avoid `format!()` because the page contains `{}` from JS
/// object literals, which would conflict with Rust formatting.
pub fn render_html_report(title: &str, figures: &[Figure]) -> anyhow::Result<String> {
    // `</` would close the script element early.
    let json = serde_json::to_string(figures)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .chart { height: 560px; margin: 12px 16px; }
  .muted { color: #777; font-size: 12px; }
</style>
</head>
<body>
<header>
  <b>__TITLE__</b> <span class="muted" id="summary"></span>
</header>
<div id="charts"></div>

<script>
// Embedded figures (JSON array)
const FIGURES = __DATA__;

function renderFigure(fig, idx) {
  const el = document.createElement("div");
  el.className = "chart";
  el.id = "chart-" + idx;
  document.getElementById("charts").appendChild(el);

  const traces = fig.traces.map((t) => ({
    type: "scatter",
    mode: fig.mode,
    name: t.name,
    x: t.x,
    y: t.y,
  }));
  const layout = {
    title: { text: fig.title },
    xaxis: { title: { text: fig.x_label }, type: fig.log_x ? "log" : "linear" },
    yaxis: { title: { text: fig.y_label } },
    legend: { title: { text: fig.legend_title } },
  };
  Plotly.newPlot(el, traces, layout, { responsive: true });
}

const points = FIGURES.reduce((n, f) => n + f.traces.reduce((m, t) => m + t.x.length, 0), 0);
document.getElementById("summary").textContent =
  `${FIGURES.length} chart(s), ${points} point(s)`;
FIGURES.forEach(renderFigure);
</script>
</body>
</html>
"#;

    Ok(TEMPLATE
        .replace("__TITLE__", &escape_html(title))
        .replace("__DATA__", &json))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::chart::Trace;

    fn figure(title: &str) -> Figure {
        Figure {
            title: title.to_string(),
            x_label: "number of elements".to_string(),
            y_label: "time (us)".to_string(),
            legend_title: "library name".to_string(),
            log_x: true,
            mode: "lines+markers".to_string(),
            traces: vec![Trace {
                name: "hash_table".to_string(),
                x: vec![10, 100],
                y: vec![1, 9],
            }],
        }
    }

    #[test]
    fn embeds_figures_as_json() {
        let html = render_html_report("Test results", &[figure("Remove element time performance")])
            .unwrap();

        assert!(html.contains("<title>Test results</title>"));
        assert!(html.contains(r#""title":"Remove element time performance""#));
        assert!(html.contains(r#""x":[10,100]"#));
        assert!(!html.contains("__DATA__"));
    }

    #[test]
    fn script_close_tag_is_escaped() {
        let html = render_html_report("t", &[figure("</script><b>")]).unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r#"<\/script><b>"#));
    }
}
