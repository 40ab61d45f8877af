// RSS feed parsing.
// Extracts items from an RSS 2.0 document, preserving document order.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{Result, RssMcpError};

use super::types::FeedItem;

/// Parse an RSS 2.0 document from raw XML bytes.
///
/// Items come back in document order; feeds deliver newest first and nothing
/// downstream re-sorts them. Elements outside `<item>` (channel metadata)
/// are ignored.
pub fn parse_feed(xml: &[u8]) -> Result<Vec<FeedItem>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut buf = Vec::new();

    let mut current_item: Option<FeedItem> = None;
    let mut current_element = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "item" {
                    current_item = Some(FeedItem::default());
                }
                current_element = name;
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"item" {
                    if let Some(item) = current_item.take() {
                        items.push(item);
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                set_field(&mut current_item, &current_element, text);
            }
            Ok(Event::CData(e)) => {
                // hnrss and friends wrap descriptions in CDATA
                let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                set_field(&mut current_item, &current_element, text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(RssMcpError::Parse(format!("XML error: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    Ok(items)
}

/// Assign text to the field named by the enclosing element, if inside an item.
fn set_field(current_item: &mut Option<FeedItem>, element: &str, text: String) {
    let Some(item) = current_item.as_mut() else {
        return;
    };
    if text.is_empty() {
        return;
    }
    match element {
        "title" => item.title = Some(text),
        "link" => item.link = Some(text),
        "description" => item.description = Some(text),
        "content:encoded" => item.content = Some(text),
        "pubDate" => item.pub_date = Some(text),
        _ => {}
    }
}
