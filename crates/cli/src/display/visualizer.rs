//! Visualisation des séries d'entropie

use tabled::{Table, Tabled};

pub const TITLE: &str = "Information Entropy Spectra";
pub const X_LABEL: &str = "Window Position";
pub const Y_LABEL: &str = "Shannon Entropy";

const BAR_WIDTH: usize = 40;
const SVG_WIDTH: f64 = 800.0;
const SVG_HEIGHT: f64 = 400.0;
const SVG_MARGIN: f64 = 50.0;

/// Borne haute de l'axe des ordonnées (au moins 1 bit)
fn y_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(1.0, f64::max)
}

/// Tableau fenêtre / entropie avec une barre proportionnelle
pub fn entropy_table(values: &[f64]) -> String {
    #[derive(Tabled)]
    struct EntropyRow {
        #[tabled(rename = "Window")]
        window: usize,
        #[tabled(rename = "Entropy")]
        entropy: String,
        #[tabled(rename = "")]
        bar: String,
    }

    let max = y_max(values);
    let rows: Vec<EntropyRow> = values
        .iter()
        .enumerate()
        .map(|(i, &h)| EntropyRow {
            window: i + 1,
            entropy: format!("{:.4}", h),
            bar: "█".repeat(((h / max) * BAR_WIDTH as f64).round() as usize),
        })
        .collect();

    Table::new(rows).to_string()
}

/// Série sur une ligne, un caractère par fenêtre
pub fn sparkline(values: &[f64]) -> String {
    const TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    let max = y_max(values);
    values
        .iter()
        .map(|&h| {
            let level = ((h / max) * (TICKS.len() - 1) as f64).round() as usize;
            TICKS[level.min(TICKS.len() - 1)]
        })
        .collect()
}

/// Série au format JSON
pub fn entropy_json(values: &[f64]) -> serde_json::Value {
    serde_json::json!({
        "title": TITLE,
        "x_label": X_LABEL,
        "y_label": Y_LABEL,
        "values": values,
    })
}

/// Tracé SVG en ligne brisée avec marqueurs
pub fn entropy_svg(values: &[f64]) -> String {
    let max = y_max(values);
    let plot_w = SVG_WIDTH - 2.0 * SVG_MARGIN;
    let plot_h = SVG_HEIGHT - 2.0 * SVG_MARGIN;
    let span = (values.len().max(2) - 1) as f64;

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            let x = SVG_MARGIN + plot_w * i as f64 / span;
            let y = SVG_MARGIN + plot_h * (1.0 - h / max);
            (x, y)
        })
        .collect();

    let polyline = points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ");
    let markers = points
        .iter()
        .map(|(x, y)| format!(r#"<circle cx="{:.2}" cy="{:.2}" r="2.5"/>"#, x, y))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect x="{m}" y="{m}" width="{pw}" height="{ph}" fill="none" stroke="#ccc"/>
  <text x="{cx}" y="25" text-anchor="middle" font-size="16">{title}</text>
  <text x="{cx}" y="{xl}" text-anchor="middle">{x_label}</text>
  <text x="15" y="{cy}" text-anchor="middle" transform="rotate(-90 15 {cy})">{y_label}</text>
  <text x="{lx}" y="{m}" text-anchor="end">{max:.2}</text>
  <text x="{lx}" y="{bottom}" text-anchor="end">0</text>
  <polyline fill="none" stroke="#1f77b4" stroke-width="1.5" points="{polyline}"/>
  <g fill="#1f77b4">{markers}</g>
</svg>"##,
        w = SVG_WIDTH,
        h = SVG_HEIGHT,
        m = SVG_MARGIN,
        pw = plot_w,
        ph = plot_h,
        cx = SVG_WIDTH / 2.0,
        cy = SVG_HEIGHT / 2.0,
        xl = SVG_HEIGHT - 10.0,
        lx = SVG_MARGIN - 5.0,
        bottom = SVG_HEIGHT - SVG_MARGIN,
        title = TITLE,
        x_label = X_LABEL,
        y_label = Y_LABEL,
        max = max,
        polyline = polyline,
        markers = markers,
    )
}

/// Page HTML autonome contenant le tracé
pub fn entropy_html(values: &[f64]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .stats {{ margin: 20px 0; }}
    </style>
</head>
<body>
    <h1>🧬 {title}</h1>
    <div class="stats">
        <p><strong>Windows:</strong> {count}</p>
        <p><strong>Profile:</strong> {sparkline}</p>
    </div>
    {svg}
</body>
</html>
"#,
        title = TITLE,
        count = values.len(),
        sparkline = sparkline(values),
        svg = entropy_svg(values),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_levels() {
        assert_eq!(sparkline(&[0.0, 1.0, 0.5]), "▁█▅");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn test_svg_has_one_marker_per_window() {
        let svg = entropy_svg(&[0.0, 0.5, 1.0, 0.25]);
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.contains(TITLE));
    }

    #[test]
    fn test_json_shape() {
        let json = entropy_json(&[1.0, 0.0]);
        assert_eq!(json["title"], TITLE);
        assert_eq!(json["values"][0], 1.0);
        assert_eq!(json["values"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_table_rows() {
        let table = entropy_table(&[1.0, 0.0]);
        assert!(table.contains("1.0000"));
        assert!(table.contains("0.0000"));
        assert!(table.contains(&"█".repeat(BAR_WIDTH)));
    }
}
