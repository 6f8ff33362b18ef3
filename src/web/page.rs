use crate::structures::Locale;

const WELCOME_TEMPLATE: &str = include_str!("../../templates/welcome.html");

pub const REQUIREMENTS: [&str; 6] = [
    "Containerized Laravel API",
    "Jenkins CI/CD pipeline",
    "Single Docker container deployment",
    "Health endpoint with build metadata",
    "Secure secret management",
    "Comprehensive documentation",
];

/// Pre-rendered welcome document, kept in managed state.
pub struct WelcomePage(pub String);

impl WelcomePage {
    pub fn render(locale: &Locale) -> Self {
        let items = REQUIREMENTS
            .iter()
            .map(|r| format!("                        <li>{r}</li>"))
            .collect::<Vec<_>>()
            .join("\n");

        let html = WELCOME_TEMPLATE
            .replace("{{lang}}", &locale.html_lang())
            .replace("{{requirements}}", &items);
        Self(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_attribute_uses_hyphens() {
        let page = WelcomePage::render(&"en_US".parse().unwrap());
        assert!(page.0.contains(r#"<html lang="en-US">"#));
        assert!(!page.0.contains("{{"));
    }

    #[test]
    fn requirements_are_listed_in_order() {
        let page = WelcomePage::render(&Locale::default());
        let positions: Vec<usize> = REQUIREMENTS
            .iter()
            .map(|r| page.0.find(&format!("<li>{r}</li>")).expect("requirement present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn brief_content_is_present() {
        let page = WelcomePage::render(&Locale::default()).0;
        for needle in [
            "DevOps Challenge",
            "code → Docker image → deployed service",
            "4–6 hours (1–2 days)",
            "Intermediate–Senior DevOps",
        ] {
            assert!(page.contains(needle), "missing {needle}");
        }
    }
}
