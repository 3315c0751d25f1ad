//! Static display labels for known folders and files.
//!
//! Lookups are exact-name matches; a name missing from its table is
//! displayed as-is.

use std::collections::HashMap;
use std::sync::LazyLock;

const FOLDER_ENTRIES: &[(&str, &str)] = &[
    ("01-product", "01 · Product"),
    ("cad", "CAD Files"),
    ("drawings", "Drawings"),
    ("models", "Models"),
    ("02-sourcing", "02 · Sourcing"),
    ("alibaba-messages", "Alibaba Messages"),
    ("03-brand", "03 · Brand"),
    ("logo", "Logo"),
    ("04-website", "04 · Website"),
    ("copy", "Copy"),
    ("site", "Live Site"),
    ("05-marketing", "05 · Marketing"),
    ("email-sequence", "Email Sequence"),
    ("outreach-templates", "Outreach Templates"),
    ("06-packaging", "06 · Packaging"),
    ("07-business", "07 · Business"),
    ("08-content", "08 · Content"),
    ("blog-posts", "Blog Posts"),
];

const FILE_ENTRIES: &[(&str, &str)] = &[
    ("README.md", "README — Project Overview"),
    ("product-spec.md", "Product Specification"),
    ("bill-of-materials.csv", "Bill of Materials"),
    ("manufacturing-process.md", "Manufacturing Process"),
    ("testing-protocol.md", "Testing Protocol"),
    ("weight-and-dimensions.md", "Weight & Dimensions"),
    ("technical-drawings.md", "Technical Drawings"),
    ("model-descriptions.md", "Model Descriptions"),
    ("message-01-cast-iron-foundry.md", "Message 01 — Cast Iron Foundry"),
    ("message-02-ss-manufacturer.md", "Message 02 — SS Manufacturer"),
    ("message-03-combo-factory.md", "Message 03 — Combo Factory"),
    ("import-tariff-research.md", "Import Tariff Research"),
    ("landed-cost-estimate.csv", "Landed Cost Estimate"),
    ("prototyping-timeline.md", "Prototyping Timeline"),
    ("supplier-questionnaire.md", "Supplier Questionnaire"),
    ("supplier-scorecard.csv", "Supplier Scorecard"),
    ("brand-name-research.md", "Brand Name Research"),
    ("brand-voice.md", "Brand Voice"),
    ("color-palette.md", "Color Palette"),
    ("logo-concepts.md", "Logo Concepts"),
    ("logo-primary.svg", "Logo — Primary"),
    ("logo-badge.svg", "Logo — Badge"),
    ("typography.md", "Typography"),
    ("website-copy.md", "Website Copy"),
    ("faq.md", "FAQ"),
    ("seo-plan.csv", "SEO Plan"),
    ("index.html", "Website — Home"),
    ("about.html", "Website — About"),
    ("styles.css", "Stylesheet"),
    ("app.js", "JavaScript"),
    ("email-01-welcome.md", "Email 01 — Welcome"),
    ("email-02-product-deep-dive.md", "Email 02 — Product Deep Dive"),
    ("email-03-tallow-catcher.md", "Email 03 — Tallow Catcher"),
    ("email-04-first-use.md", "Email 04 — First Use"),
    ("email-05-recipes-community.md", "Email 05 — Recipes & Community"),
    ("media-outreach-list.csv", "Media Outreach List"),
    ("press-release.md", "Press Release"),
    ("social-media-posts.md", "Social Media Posts"),
    ("video-script-15s.md", "Video Script — 15 Seconds"),
    ("video-script-60s.md", "Video Script — 60 Seconds"),
    ("template-A-influencer.md", "Template A — Influencer"),
    ("template-B-press.md", "Template B — Press"),
    ("template-C-product-media.md", "Template C — Product Media"),
    ("template-D-organization.md", "Template D — Organization"),
    ("template-E-collab.md", "Template E — Collab"),
    ("box-artwork.md", "Box Artwork"),
    ("box-dieline.md", "Box Dieline"),
    ("packaging-copy.md", "Packaging Copy"),
    ("product-manual.md", "Product Manual"),
    ("quick-start-guide.md", "Quick-Start Guide"),
    ("business-plan.md", "Business Plan"),
    ("business-registrations.md", "Business Registrations"),
    ("financial-forecast.csv", "Financial Forecast"),
    ("fulfillment-research.md", "Fulfillment Research"),
    ("inventory-tracker.csv", "Inventory Tracker"),
    ("pre-order-terms.md", "Pre-Order Terms"),
    ("pricing-model.csv", "Pricing Model"),
    ("safety-certification-research.md", "Safety Certification Research"),
    ("warranty.md", "Warranty"),
    ("tallow-donuts-founder-story.md", "Blog — Tallow Donuts Founder Story"),
    ("tallow-frying-guide.md", "Blog — Tallow Frying Guide"),
    ("tallow-reuse-guide.md", "Blog — Tallow Reuse Guide"),
    ("recipe-booklet.md", "Recipe Booklet"),
];

static FOLDER_LABELS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FOLDER_ENTRIES.iter().copied().collect());

static FILE_LABELS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FILE_ENTRIES.iter().copied().collect());

/// Display label for a folder name.
pub fn folder_label(name: &str) -> &str {
    FOLDER_LABELS.get(name).copied().unwrap_or(name)
}

/// Display label for a file name.
pub fn file_label(name: &str) -> &str {
    FILE_LABELS.get(name).copied().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(folder_label("01-product"), "01 · Product");
        assert_eq!(folder_label("site"), "Live Site");
        assert_eq!(file_label("README.md"), "README — Project Overview");
        assert_eq!(file_label("faq.md"), "FAQ");
    }

    #[test]
    fn test_unknown_falls_back_to_name() {
        assert_eq!(folder_label("misc"), "misc");
        assert_eq!(file_label("notes.txt"), "notes.txt");
    }

    #[test]
    fn test_tables_are_separate() {
        // "site" is only a folder label, "faq.md" only a file label.
        assert_eq!(file_label("site"), "site");
        assert_eq!(folder_label("faq.md"), "faq.md");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(file_label("readme.md"), "readme.md");
        assert_eq!(folder_label("CAD"), "CAD");
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        assert_eq!(FOLDER_LABELS.len(), FOLDER_ENTRIES.len());
        assert_eq!(FILE_LABELS.len(), FILE_ENTRIES.len());
    }
}
