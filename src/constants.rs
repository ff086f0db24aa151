pub const COMPANY_NAME: &str = "StabilTech";
pub const COMPANY_DOMAIN: &str = "stabiltech.de";
pub const COMPANY_URL: &str = "https://stabiltech.de";

/// Mailbox that receives contact form notifications.
pub const CONTACT_EMAIL: &str = "info@stabiltech.de";
/// Mailbox that receives job applications.
pub const CAREERS_EMAIL: &str = "moise.ioan@stabiltech.de";

pub const SERVICE_LABELS: &[(&str, &str)] = &[
  ("mobile", "Mobile App Development"),
  ("web", "Web Development"),
  ("management", "Management Systems"),
  ("seo", "SEO Optimization"),
  ("erp", "ERP Integration"),
  ("other", "Other"),
];

/// Resolves a submitted service slug to its display label. Unknown values are
/// shown verbatim.
pub fn service_label(service: Option<&str>) -> String {
  match service {
    None | Some("") => "Not specified".to_string(),
    Some(slug) => SERVICE_LABELS
      .iter()
      .find(|(key, _)| *key == slug)
      .map(|(_, label)| label.to_string())
      .unwrap_or_else(|| slug.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_service_label_known_slug() {
    assert_eq!(service_label(Some("web")), "Web Development");
    assert_eq!(service_label(Some("erp")), "ERP Integration");
  }

  #[test]
  fn test_service_label_free_text() {
    assert_eq!(service_label(Some("Blockchain audit")), "Blockchain audit");
  }

  #[test]
  fn test_service_label_missing() {
    assert_eq!(service_label(None), "Not specified");
    assert_eq!(service_label(Some("")), "Not specified");
  }
}
