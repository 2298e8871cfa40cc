//! Plain-text rendering of the marketplace screens.

use crate::catalog::Catalog;
use crate::flow::{CreationDraft, ListingForm, Preview};
use crate::models::{Category, Listing};
use crate::shell::AppState;
use std::fmt::Write;

pub const APP_NAME: &str = "سوقنا";
pub const INSIGHTS_FALLBACK: &str = "احصل على نظرة شاملة للسوق والأسعار الحالية مدعومة ببيانات جوجل.";
pub const EMPTY_SECTION: &str = "لا توجد إعلانات في هذا القسم حالياً";

const TRANSPORT_ACTIONS: [&str; 3] = ["طلب دينا نقل", "طلب سطحة سيارات", "تأجير معدات بالساعة"];

/// `2500000` -> `2,500,000`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const CARDS_PER_ROW: usize = 2;

fn card_lines(listing: &Listing) -> [String; 3] {
    [
        format!("[{}] {}", listing.category.badge(), listing.title),
        format!("    \u{1F4CD} {}", listing.location),
        format!("    {} {}", format_price(listing.price), listing.currency),
    ]
}

/// Cards side by side, one text line per card field
fn render_row(out: &mut String, row: &[&Listing]) {
    let cards: Vec<[String; 3]> = row.iter().map(|l| card_lines(l)).collect();
    let width = cards
        .iter()
        .take(cards.len().saturating_sub(1))
        .flat_map(|card| card.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    for field in 0..3 {
        let cells: Vec<String> = cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if i + 1 < cards.len() {
                    format!("{:<width$}", card[field], width = width)
                } else {
                    card[field].clone()
                }
            })
            .collect();
        let _ = writeln!(out, "  {}", cells.join("   "));
    }
}

fn render_pills(out: &mut String, active: Category) {
    let pills: Vec<String> = Category::ALL
        .iter()
        .map(|c| {
            if *c == active {
                format!("[{} {}]", c.icon(), c.label())
            } else {
                format!(" {} {} ", c.icon(), c.label())
            }
        })
        .collect();
    let _ = writeln!(out, "{}", pills.join(" "));
}

/// Home screen: header, category pills, insights banner and listing grid
pub fn render_home(state: &AppState, catalog: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", APP_NAME);
    render_pills(&mut out, state.active_category);
    out.push('\n');

    let _ = writeln!(out, "\u{2728} تحليلات الذكاء الاصطناعي");
    let _ = writeln!(out, "اكتشف أفضل الفرص اليوم");
    let _ = writeln!(out, "{}", state.insights.as_deref().unwrap_or(INSIGHTS_FALLBACK));
    out.push('\n');

    let _ = writeln!(out, "أحدث الإعلانات");
    let listings = state.visible_listings(catalog);
    if listings.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY_SECTION);
    } else {
        for row in listings.chunks(CARDS_PER_ROW) {
            render_row(&mut out, row);
        }
    }

    if state.active_category == Category::Uber {
        out.push('\n');
        let _ = writeln!(out, "خدمات النقل والتوصيل");
        let _ = writeln!(out, "اطلب شاحنة أو معدة لنقل بضاعتك");
        for action in TRANSPORT_ACTIONS {
            let _ = writeln!(out, "  + {}", action);
        }
    }

    out
}

/// "New listing" modal for the given draft
pub fn render_creation(draft: &CreationDraft) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "إضافة إعلان جديد");
    let _ = writeln!(out, "صور الإعلان");

    match draft.preview() {
        Preview::Upload => {
            let _ = writeln!(out, "  اضغط لرفع صورة من المعرض");
        }
        Preview::Image(image) => {
            let _ = writeln!(out, "  \u{1F5BC} {} ({} bytes)", image.mime_type, image.bytes.len());
        }
        Preview::Video(clip) => {
            let _ = writeln!(out, "  \u{1F3AC} {} ({} bytes)", clip.mime_type, clip.bytes.len());
        }
    }

    if draft.is_processing() {
        let _ = writeln!(out, "جاري المعالجة بالذكاء الاصطناعي...");
    } else if draft.actions_available() {
        let _ = writeln!(out, "  \u{2728} تحسين بالذكاء الاصطناعي");
        let _ = writeln!(out, "  \u{1F3A5} تحويل لفيديو (Veo)");
    }

    let sections: Vec<&str> = ListingForm::category_choices()
        .iter()
        .map(|c| c.label())
        .collect();
    let _ = writeln!(out, "القسم: {}", sections.join(" / "));

    out
}
