//! HTML report assembly. The layout mirrors the briefing mail the team is
//! used to: header, market weather box, one section per category with full
//! cards for the model picks and a short headline list for everything else.

use html_escape::encode_text;
use nb_core::{Briefing, NewsItem, Pick, Risk};

const STYLE: &str = r#"
body { font-family: 'Pretendard', 'Malgun Gothic', 'Apple SD Gothic Neo', sans-serif; line-height: 1.6; color: #333; background-color: #f2f4f7; margin: 0; padding: 0; }
.email-wrapper { width: 100%; background-color: #f2f4f7; padding: 50px 0; }
.email-container { max-width: 850px; margin: 0 auto; background-color: #ffffff; border-radius: 16px; overflow: hidden; }
.header { background-color: #0054a6; color: #ffffff; padding: 40px 50px; }
.header h1 { margin: 0; font-size: 32px; font-weight: 800; }
.header-sub { font-size: 18px; margin-top: 10px; opacity: 0.9; }
.content { padding: 50px; background-color: #ffffff; }
.intro-text { margin-bottom: 50px; font-size: 18px; color: #344054; padding-bottom: 30px; border-bottom: 1px solid #eaecf0; word-break: keep-all; }
.weather-section { background-color: #eaf4fc; padding: 30px; border-radius: 12px; margin-bottom: 40px; border: 1px solid #dbeafe; word-break: keep-all; }
.category-title { font-size: 24px; color: #111; margin: 50px 0 20px 0; border-left: 5px solid #0054a6; padding-left: 15px; font-weight: 700; }
.news-card { background-color: #ffffff; border: 1px solid #eaecf0; border-radius: 16px; padding: 30px; margin-bottom: 25px; }
.news-title { font-size: 22px; font-weight: 700; color: #101828; margin-bottom: 15px; word-break: keep-all; }
.news-body { font-size: 17px; color: #475467; line-height: 1.8; margin-bottom: 20px; word-break: keep-all; }
.insight-table { width: 100%; border-collapse: separate; border-spacing: 0; margin-bottom: 20px; border-radius: 8px; }
.insight-label { padding: 15px 5px 15px 20px; width: 1%; white-space: nowrap; vertical-align: top; font-weight: bold; font-size: 16px; }
.insight-content { padding: 15px 20px 15px 5px; font-size: 16px; vertical-align: top; word-break: keep-all; }
.risk-critical { background-color: #fdecea; color: #d32f2f; }
.risk-warning { background-color: #fff4e5; color: #ed6c02; }
.risk-info { background-color: #f0f9ff; color: #0288d1; }
.link-wrapper { text-align: right; }
.link-btn { display: inline-block; background-color: #ffffff; color: #344054; border: 1px solid #d0d5dd; padding: 10px 18px; text-decoration: none; border-radius: 8px; font-size: 14px; font-weight: 600; }
.headline-list-box { background-color: #f8f9fa; border-top: 2px solid #0054a6; padding: 20px 25px; margin-top: 10px; margin-bottom: 40px; }
.headline-title { font-size: 16px; font-weight: 700; color: #0054a6; margin-bottom: 15px; }
.headline-ul { margin: 0; padding-left: 20px; }
.headline-li { margin-bottom: 8px; font-size: 15px; color: #555; }
.headline-link { text-decoration: none; color: #333; }
.footer { background-color: #101828; padding: 40px; text-align: center; font-size: 14px; color: #98a2b3; }
"#;

fn risk_class(risk: Risk) -> &'static str {
    match risk {
        Risk::Critical => "risk-critical",
        Risk::Warning => "risk-warning",
        Risk::Info => "risk-info",
    }
}

/// Renders the full self-contained HTML report. Sections follow the
/// configured category order, the catch-all and any unexpected labels come
/// last, and categories with no items are omitted entirely. All feed-derived
/// and model-derived text is escaped.
pub fn render_report(
    date_label: &str,
    briefing: &Briefing,
    items: &[NewsItem],
    category_order: &[String],
) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>Daily Market &amp; Risk Briefing</title>\n<style>{}</style>\n</head>\n<body>\n",
        STYLE
    ));
    html.push_str("<div class=\"email-wrapper\"><div class=\"email-container\">\n");
    html.push_str(&format!(
        "<div class=\"header\"><h1>Daily Market &amp; Risk Briefing</h1><div class=\"header-sub\">구매계약실 | {}</div></div>\n",
        encode_text(date_label)
    ));
    html.push_str("<div class=\"content\">\n");
    html.push_str(&format!(
        "<div class=\"intro-text\">안녕하십니까, 구매계약실 여러분.<br><strong>{}</strong> 주요 시장 이슈와 리스크 요인을 보고드립니다.</div>\n",
        encode_text(date_label)
    ));

    if !briefing.weather.is_empty() {
        html.push_str(&format!(
            "<div class=\"weather-section\"><h2 style=\"margin:0 0 15px 0; color:#0054a6; font-size:22px;\">🌤️ Today's Market Weather</h2><div style=\"font-size: 18px;\">{}</div></div>\n",
            encode_text(&briefing.weather)
        ));
    }

    for label in section_order(items, category_order) {
        render_section(&mut html, &label, briefing, items);
    }

    html.push_str("</div>\n");
    html.push_str("<div class=\"footer\"><p>본 메일은 자동 발송되었습니다.</p><p>구매계약실 Daily Briefing</p></div>\n");
    html.push_str("</div></div>\n</body>\n</html>\n");
    html
}

/// Configured labels first, then any remaining labels (the catch-all
/// included) in first-appearance order. Labels with no items are dropped.
fn section_order(items: &[NewsItem], category_order: &[String]) -> Vec<String> {
    let mut order: Vec<String> = category_order
        .iter()
        .filter(|label| items.iter().any(|item| &item.category == *label))
        .cloned()
        .collect();
    for item in items {
        if !order.contains(&item.category) {
            order.push(item.category.clone());
        }
    }
    order
}

fn render_section(html: &mut String, label: &str, briefing: &Briefing, items: &[NewsItem]) {
    let in_category: Vec<&NewsItem> = items.iter().filter(|i| i.category == label).collect();

    html.push_str(&format!(
        "<div class=\"category-title\">[{}]</div>\n",
        encode_text(label)
    ));

    let mut picked_ids = Vec::new();
    for item in &in_category {
        if let Some(pick) = briefing.picks.iter().find(|p| p.id == item.id) {
            render_card(html, item, pick);
            picked_ids.push(item.id);
        }
    }

    let headlines: Vec<&&NewsItem> = in_category
        .iter()
        .filter(|i| !picked_ids.contains(&i.id))
        .collect();
    if headlines.is_empty() {
        return;
    }
    html.push_str("<div class=\"headline-list-box\"><div class=\"headline-title\">📌 관련 주요 단신 (Headlines)</div><ul class=\"headline-ul\">\n");
    for item in headlines {
        html.push_str(&format!(
            "<li class=\"headline-li\"><a class=\"headline-link\" href=\"{}\">{}</a></li>\n",
            encode_text(&item.link),
            encode_text(&item.title)
        ));
    }
    html.push_str("</ul></div>\n");
}

fn render_card(html: &mut String, item: &NewsItem, pick: &Pick) {
    html.push_str(&format!(
        "<div class=\"news-card\"><div class=\"news-title\">{}</div><div class=\"news-body\">{}</div>\n",
        encode_text(&item.title),
        encode_text(&pick.summary)
    ));
    html.push_str(&format!(
        "<table class=\"insight-table {}\"><tr><td class=\"insight-label\">💡 Insight:</td><td class=\"insight-content\">{}</td></tr></table>\n",
        risk_class(pick.risk),
        encode_text(&pick.insight)
    ));
    html.push_str(&format!(
        "<div class=\"link-wrapper\"><a class=\"link-btn\" href=\"{}\">🔗 원문 기사 보기</a></div></div>\n",
        encode_text(&item.link)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use nb_core::RawTimestamp;

    fn item(id: usize, title: &str, category: &str) -> NewsItem {
        NewsItem {
            id,
            title: title.to_string(),
            link: format!("https://n.kr/{}", id),
            keyword: "시멘트 가격".to_string(),
            category: category.to_string(),
            snippet: None,
            published: RawTimestamp::Missing,
        }
    }

    fn briefing() -> Briefing {
        Briefing {
            weather: "전반적으로 약간 흐림입니다.".to_string(),
            picks: vec![Pick {
                id: 0,
                summary: "시멘트사들이 가격 인상을 통보했습니다.".to_string(),
                insight: "가용 물량 선발주 검토 필요.".to_string(),
                risk: Risk::Warning,
            }],
        }
    }

    #[test]
    fn picked_items_become_cards_and_rest_become_headlines() {
        let items = vec![
            item(0, "시멘트 가격 인상 통보", "자재/시황"),
            item(1, "레미콘 조합 반발 예고", "자재/시황"),
        ];
        let order = vec!["자재/시황".to_string()];
        let html = render_report("2026년 1월 8일", &briefing(), &items, &order);

        assert!(html.contains("시멘트 가격 인상 통보"));
        assert!(html.contains("risk-warning"));
        assert!(html.contains("가용 물량 선발주 검토 필요."));
        // The unpicked item appears only in the headline list.
        assert!(html.contains("레미콘 조합 반발 예고"));
        let card_region = html.find("class=\"news-card\"").unwrap();
        let headline_region = html.find("class=\"headline-list-box\"").unwrap();
        assert!(card_region < headline_region);
        assert!(html.contains("전반적으로 약간 흐림입니다."));
    }

    #[test]
    fn empty_categories_are_omitted_and_catch_all_comes_last() {
        let items = vec![
            item(0, "환율 급등", "기타"),
            item(1, "철근 가격 보합", "자재/시황"),
        ];
        let order = vec!["자재/시황".to_string(), "물류/운송".to_string()];
        let html = render_report("2026년 1월 8일", &Briefing::default(), &items, &order);

        assert!(html.contains("[자재/시황]"));
        assert!(!html.contains("[물류/운송]"));
        let materials = html.find("[자재/시황]").unwrap();
        let catch_all = html.find("[기타]").unwrap();
        assert!(materials < catch_all);
        // No weather box without a weather line.
        assert!(!html.contains("Today's Market Weather"));
    }

    #[test]
    fn feed_text_is_escaped() {
        let items = vec![item(0, "<script>alert('x')</script> 제목", "자재/시황")];
        let order = vec!["자재/시황".to_string()];
        let html = render_report("2026년 1월 8일", &Briefing::default(), &items, &order);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
