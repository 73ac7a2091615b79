//! 状态页模板生成模块
//! 生成带版本展示区域的默认宿主页面；操作方也可以提供自己的模板

use build_html::{Html, HtmlContainer, HtmlPage};

use crate::stamp::{BUILT_REGION, VERSION_REGION};

/// 状态页生成器
pub struct StatusPage;

impl StatusPage {
    /// 生成默认状态页：built/version两个区域为空，等待写入
    pub fn generate(title: &str) -> String {
        let safe_title = escape_html(title);
        let mut html = HtmlPage::new()
            .with_title(&safe_title)
            .with_meta(vec![("charset", "utf-8")])
            .with_style(Self::page_css());

        html.add_raw("<div class=\"section\">");
        html.add_raw(&format!("<h1>{}</h1>", safe_title));
        html.add_raw(&format!(
            "<p>构建时间: <span id=\"{}\"></span></p>",
            BUILT_REGION
        ));
        html.add_raw(&format!("<pre id=\"{}\"></pre>", VERSION_REGION));
        html.add_raw("</div>");

        html.to_html_string()
    }

    /// 状态页CSS样式
    fn page_css() -> &'static str {
        r#"
        body {
            font-family: 'Microsoft YaHei', Arial, sans-serif;
            margin: 0;
            padding: 20px;
            line-height: 1.6;
            color: #333;
            background-color: #fff;
        }
        .section {
            margin: 30px 0;
            padding: 20px;
            border: 1px solid #e0e0e0;
            border-radius: 8px;
        }
        #built {
            color: #2c3e50;
            font-weight: bold;
        }
        #version {
            background: #f7f7f7;
            padding: 12px;
            border-radius: 6px;
        }
        "#
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::HtmlDocument;
    use crate::model::version::{VersionInfo, REVISION_PLACEHOLDER};
    use crate::stamp;

    #[test]
    fn generated_page_contains_both_empty_regions() {
        let page = StatusPage::generate("服务状态");
        assert!(page.contains(r#"<span id="built"></span>"#));
        assert!(page.contains(r#"<pre id="version"></pre>"#));
    }

    #[test]
    fn generated_page_round_trips_through_stamping() {
        let mut doc = HtmlDocument::new(StatusPage::generate("服务状态"));
        let info = VersionInfo::at(REVISION_PLACEHOLDER, "2024-01-01T00:00:00.000Z".to_string());
        stamp::stamp_with(&mut doc, &info).expect("generated page has both regions");

        assert_eq!(
            doc.region_text(stamp::BUILT_REGION),
            Some("2024-01-01T00:00:00.000Z")
        );
        let value: serde_json::Value =
            serde_json::from_str(doc.region_text(stamp::VERSION_REGION).expect("written"))
                .expect("valid JSON in version region");
        assert_eq!(value["git"], REVISION_PLACEHOLDER);
    }

    #[test]
    fn title_markup_is_escaped() {
        let page = StatusPage::generate("a<b>");
        assert!(page.contains("<h1>a&lt;b&gt;</h1>"));
    }
}
