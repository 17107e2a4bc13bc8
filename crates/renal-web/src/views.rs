//! HTML rendering.
//!
//! Pages are small enough to build with `format!`. Every interpolated value
//! goes through [`escape`].

use std::fmt::Write;

use renal_core::{DosingForm, DosingOutcome, Drug};

use crate::config::PageContext;

/// Tips shown on the home page.
pub const TIPS: [&str; 3] = [
    "Take immunosuppressants at the same times daily.",
    "Keep a simple meds log to avoid missed doses.",
    "Ask your clinician before new supplements.",
];

const DISCLAIMER: &str =
    "Educational demo only. Nothing here is medical advice; always follow your transplant team.";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn layout(page: PageContext<'_>, title: &str, body: &str) -> String {
    let site = escape(page.site_name);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<link rel="stylesheet" href="/css/site.css">
</head>
<body>
<header>
<h1>{site}</h1>
<nav><a href="/">Home</a><a href="/dosing">Dosing helper</a><a href="/about">About</a><a href="/contact">Contact</a></nav>
</header>
<main>
{body}
</main>
<footer>&copy; {year} {site}</footer>
</body>
</html>
"#,
        title = escape(title),
        site = site,
        body = body,
        year = page.year,
    )
}

pub fn index(page: PageContext<'_>) -> String {
    let mut body = String::from("<h2>Welcome</h2>\n<p>Simple reminders for life after a kidney transplant.</p>\n<ul class=\"tips\">\n");
    for tip in TIPS {
        let _ = writeln!(body, "<li>{}</li>", escape(tip));
    }
    body.push_str("</ul>\n");
    layout(page, "Home", &body)
}

/// The dosing form, optionally with the outcome of a submission.
pub fn dosing(page: PageContext<'_>, form: &DosingForm, outcome: Option<&DosingOutcome>) -> String {
    let mut body = String::from("<h2>Dosing helper</h2>\n");
    let _ = writeln!(body, "<p class=\"disclaimer\">{}</p>", escape(DISCLAIMER));

    match outcome {
        Some(DosingOutcome::Errors(errors)) => {
            body.push_str("<ul class=\"warnings\">\n");
            for error in errors {
                let _ = writeln!(body, "<li>{}</li>", escape(error));
            }
            body.push_str("</ul>\n");
        }
        Some(DosingOutcome::Suggestion(text)) => {
            let _ = writeln!(body, "<p class=\"advisory\">{}</p>", escape(text));
        }
        None => {}
    }

    body.push_str("<form method=\"post\" action=\"/dosing\">\n");
    body.push_str(&drug_select(form.drug.as_deref()));
    body.push_str(&number_input(
        "weightKg",
        "Weight (kg)",
        form.weight_kg.as_deref(),
        "0.1",
    ));
    body.push_str(&number_input(
        "creatinineUmolL",
        "Creatinine (µmol/L)",
        form.creatinine_umol_l.as_deref(),
        "1",
    ));
    body.push_str(&number_input(
        "troughLevelNgmL",
        "Trough level (ng/mL)",
        form.trough_level_ngml.as_deref(),
        "0.1",
    ));
    body.push_str("<p><button type=\"submit\">Get suggestion</button></p>\n</form>\n");

    layout(page, "Dosing helper", &body)
}

fn drug_select(selected: Option<&str>) -> String {
    let mut html = String::from(
        "<label for=\"drug\">Drug</label>\n<select id=\"drug\" name=\"drug\">\n<option value=\"\">Choose a drug</option>\n",
    );
    for drug in Drug::known() {
        let token = drug.as_str();
        let marker = if selected == Some(token) { " selected" } else { "" };
        let _ = writeln!(html, "<option value=\"{token}\"{marker}>{token}</option>");
    }
    html.push_str("</select>\n");
    html
}

fn number_input(name: &str, label: &str, value: Option<&str>, step: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n<input id=\"{name}\" name=\"{name}\" type=\"number\" step=\"{step}\" value=\"{value}\">\n",
        label = escape(label),
        value = escape(value.unwrap_or_default()),
    )
}

pub fn about(page: PageContext<'_>) -> String {
    layout(
        page,
        "About",
        "<h2>About</h2>\n<p>This site is a teaching demo for renal transplant recipients. \
         It shows how simple, rule-based reminders could be presented. It does not store \
         any data and it is not a medical device.</p>\n",
    )
}

pub fn contact(page: PageContext<'_>) -> String {
    layout(
        page,
        "Contact",
        "<h2>Contact</h2>\n<p>For questions about your medicines, contact your transplant \
         pharmacist or clinician. In an emergency, call your local emergency number.</p>\n",
    )
}

pub fn not_found(page: PageContext<'_>) -> String {
    layout(
        page,
        "Not found",
        "<h2>Page not found</h2>\n<p><a href=\"/\">Back to the home page</a></p>\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageContext<'static> {
        PageContext {
            site_name: "Renal <Demo>",
            year: 2030,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_layout_escapes_site_name_and_shows_year() {
        let html = index(page());
        assert!(html.contains("<h1>Renal &lt;Demo&gt;</h1>"));
        assert!(html.contains("&copy; 2030 Renal &lt;Demo&gt;"));
    }

    #[test]
    fn test_index_lists_tips() {
        let html = index(page());
        for tip in TIPS {
            assert!(html.contains(tip));
        }
    }

    #[test]
    fn test_dosing_echoes_and_escapes_values() {
        let form = DosingForm::from_fields(Some("cyclosporin"), "70\"><b>", "90", "6");
        let html = dosing(page(), &form, None);
        assert!(html.contains("<option value=\"cyclosporin\" selected>"));
        assert!(html.contains("value=\"70&quot;&gt;&lt;b&gt;\""));
        assert!(!html.contains("class=\"warnings\""));
        assert!(!html.contains("class=\"advisory\""));
    }

    #[test]
    fn test_dosing_renders_errors_as_warnings() {
        let outcome = DosingOutcome::Errors(vec![
            "Please choose a drug.".to_string(),
            "Weight must be a positive number.".to_string(),
        ]);
        let html = dosing(page(), &DosingForm::default(), Some(&outcome));
        assert!(html.contains("<li>Please choose a drug.</li>\n<li>Weight must be a positive number.</li>"));
        assert!(!html.contains("class=\"advisory\""));
    }

    #[test]
    fn test_dosing_renders_single_advisory() {
        let outcome = DosingOutcome::Suggestion("Keep taking it.".to_string());
        let html = dosing(page(), &DosingForm::default(), Some(&outcome));
        assert_eq!(html.matches("class=\"advisory\"").count(), 1);
        assert!(html.contains("<p class=\"advisory\">Keep taking it.</p>"));
    }
}
