//! Presentation: prompts, choice-keyboards, and result messages.
//!
//! Rendering is pure; every function returns an [`OutgoingMessage`] and
//! never touches the transport. User-facing strings follow the original
//! Turkish wording of the bot.

use crate::models::PlaceRecord;

/// Map viewer zoom level used in result deep links.
const MAP_ZOOM: u8 = 16;

/// Shown when a place has no name in the provider response.
const NAMELESS_PLACE: &str = "Adı yok";

/// One message ready to hand to the chat transport. The keyboard holds one
/// label per row, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub keyboard: Option<Vec<String>>,
    pub markdown: bool,
    pub disable_link_preview: bool,
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            markdown: false,
            disable_link_preview: false,
        }
    }

    pub fn with_keyboard(mut self, rows: Vec<String>) -> Self {
        self.keyboard = Some(rows);
        self
    }

    pub fn markdown(mut self) -> Self {
        self.markdown = true;
        self
    }

    pub fn without_link_preview(mut self) -> Self {
        self.disable_link_preview = true;
        self
    }
}

/// Prompt shown on `/start`, with one keyboard row per region.
pub fn region_prompt(regions: &[String]) -> OutgoingMessage {
    OutgoingMessage::text("🏙️ Şehir seçiniz:").with_keyboard(regions.to_vec())
}

/// Prompt shown after a region choice, with that region's districts.
pub fn sub_region_prompt(region: &str, sub_regions: &[String]) -> OutgoingMessage {
    OutgoingMessage::text(format!(
        "🏘️ *{region}* şehri seçildi.\nLütfen bir ilçe seçin:"
    ))
    .markdown()
    .with_keyboard(sub_regions.to_vec())
}

/// Prompt shown after a district choice, with the category menu.
pub fn category_prompt(sub_region: &str, categories: Vec<String>) -> OutgoingMessage {
    OutgoingMessage::text(format!(
        "📍 *{sub_region}* ilçesi seçildi.\nŞimdi kategori seçiniz:"
    ))
    .markdown()
    .with_keyboard(categories)
}

/// Notice sent while the search pipeline runs.
pub fn searching_notice(sub_region: &str, category_name: &str) -> OutgoingMessage {
    OutgoingMessage::text(format!(
        "🔍 *{sub_region}* ilçesinde *{}* aranıyor...",
        category_name.to_lowercase()
    ))
    .markdown()
}

/// One result line: glyph, name (or placeholder), and a map deep link.
pub fn place_message(glyph: &str, place: &PlaceRecord) -> OutgoingMessage {
    let name = place.name.as_deref().unwrap_or(NAMELESS_PLACE);
    let lat = place.coordinate.lat;
    let lon = place.coordinate.lon;
    let url = format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={MAP_ZOOM}/{lat}/{lon}"
    );
    OutgoingMessage::text(format!("{glyph} *{name}*\n📍 [Haritada Aç]({url})"))
        .markdown()
        .without_link_preview()
}

/// Closing summary after the per-place messages.
pub fn summary(count: usize) -> OutgoingMessage {
    OutgoingMessage::text(format!("✅ *{count} sonuç listelendi.*")).markdown()
}

pub fn no_results() -> OutgoingMessage {
    OutgoingMessage::text("😔 Hiç sonuç bulunamadı.")
}

pub fn location_not_found() -> OutgoingMessage {
    OutgoingMessage::text("Konum bulunamadı, lütfen tekrar deneyin.")
}

pub fn search_failed() -> OutgoingMessage {
    OutgoingMessage::text("Bir hata oluştu.")
}

/// Guidance for a category choice arriving before a district is set.
pub fn pick_sub_region_first() -> OutgoingMessage {
    OutgoingMessage::text("Lütfen önce ilçe seçiniz.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    #[test]
    fn test_region_prompt_keyboard_has_one_label_per_row() {
        let msg = region_prompt(&["Ankara".to_string(), "Konya".to_string()]);
        assert_eq!(msg.keyboard.as_deref(), Some(&["Ankara".to_string(), "Konya".to_string()][..]));
        assert!(!msg.markdown);
    }

    #[test]
    fn test_place_message_links_to_map_viewer() {
        let place = PlaceRecord::new(
            Some("Ankara Şehir Hastanesi".to_string()),
            Coordinate::new(39.9, 32.8),
        );
        let msg = place_message("🏥", &place);
        assert!(msg.text.starts_with("🏥 *Ankara Şehir Hastanesi*"));
        assert!(msg
            .text
            .contains("https://www.openstreetmap.org/?mlat=39.9&mlon=32.8#map=16/39.9/32.8"));
        assert!(msg.markdown);
        assert!(msg.disable_link_preview);
    }

    #[test]
    fn test_nameless_place_gets_placeholder() {
        let place = PlaceRecord::new(None, Coordinate::new(39.9, 32.8));
        let msg = place_message("⛽", &place);
        assert!(msg.text.contains("*Adı yok*"));
    }

    #[test]
    fn test_searching_notice_lowercases_category() {
        let msg = searching_notice("Çankaya", "Hastaneler");
        assert_eq!(msg.text, "🔍 *Çankaya* ilçesinde *hastaneler* aranıyor...");
    }

    #[test]
    fn test_summary_reports_count() {
        assert_eq!(summary(3).text, "✅ *3 sonuç listelendi.*");
    }
}
