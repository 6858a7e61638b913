use crate::core::html::{text_of, PageDocument};
use crate::domain::model::Availability;
use crate::utils::error::Result;

/// Which elements carry the stock label and which count as purchase controls.
#[derive(Debug, Clone)]
pub struct DetectionRules<'a> {
    pub sold_out_string: &'a str,
    pub label_tag: &'a str,
    pub control_tag: &'a str,
}

impl<'a> DetectionRules<'a> {
    pub fn new(sold_out_string: &'a str) -> Self {
        Self {
            sold_out_string,
            label_tag: crate::config::DEFAULT_LABEL_TAG,
            control_tag: crate::config::DEFAULT_CONTROL_TAG,
        }
    }

    pub fn from_config(config: &'a crate::config::RunConfig) -> Self {
        Self {
            sold_out_string: &config.sold_out_string,
            label_tag: &config.label_tag,
            control_tag: &config.control_tag,
        }
    }
}

/// Scans the page. Label text must equal the sentinel exactly; button text is
/// never inspected, a page without any control is treated as unavailable.
pub fn scan(document: &PageDocument, rules: &DetectionRules<'_>) -> Result<Availability> {
    let sold_out_count = document
        .elements_by_tag(rules.label_tag)?
        .iter()
        .filter(|label| text_of(label) == rules.sold_out_string)
        .count();

    let control_count = document.elements_by_tag(rules.control_tag)?.len();

    tracing::debug!(
        "Found {} sold out label(s) and {} control(s)",
        sold_out_count,
        control_count
    );

    Ok(Availability {
        sold_out_count,
        control_count,
    })
}

pub fn detect(body: &[u8], sold_out_string: &str) -> Result<bool> {
    let document = PageDocument::parse(body);
    let availability = scan(&document, &DetectionRules::new(sold_out_string))?;
    Ok(availability.is_available())
}
