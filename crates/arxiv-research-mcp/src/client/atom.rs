//! Atom feed parsing for arXiv query responses.
//!
//! The query API returns an Atom 1.0 document. The fields the catalog needs
//! are shallow and fixed, so this module scans tags directly instead of
//! pulling in a full XML parser.

use chrono::NaiveDate;
use url::Url;

use crate::error::{IndexError, IndexResult};
use crate::models::{IndexedPaper, PaperRecord};

/// Parse an arXiv Atom feed into indexed papers, preserving feed order.
///
/// Every entry must carry `<id>`, `<title>`, `<summary>` and a valid
/// RFC 3339 `<published>` date. Authors and the PDF link are optional.
pub fn parse_feed(xml: &str) -> IndexResult<Vec<IndexedPaper>> {
    let mut papers = Vec::new();
    for block in entry_blocks(xml)? {
        papers.push(parse_entry(block)?);
    }
    Ok(papers)
}

/// Split the feed into raw `<entry>...</entry>` blocks.
fn entry_blocks(xml: &str) -> IndexResult<Vec<&str>> {
    let mut blocks = Vec::new();
    for after in xml.split("<entry>").skip(1) {
        let end = after
            .find("</entry>")
            .ok_or_else(|| IndexError::feed("unterminated <entry> element"))?;
        blocks.push(&after[..end]);
    }
    Ok(blocks)
}

fn parse_entry(xml: &str) -> IndexResult<IndexedPaper> {
    let entry_url = tag_text(xml, "id").ok_or_else(|| IndexError::feed("entry missing <id>"))?;
    let title = tag_text(xml, "title")
        .map(|t| collapse_whitespace(&t))
        .ok_or_else(|| IndexError::feed("entry missing <title>"))?;
    let summary = tag_text(xml, "summary")
        .map(|s| s.trim().to_string())
        .ok_or_else(|| IndexError::feed("entry missing <summary>"))?;
    let published = tag_text(xml, "published")
        .ok_or_else(|| IndexError::feed("entry missing <published>"))?;

    Ok(IndexedPaper {
        short_id: short_id(&entry_url),
        record: PaperRecord {
            title,
            authors: author_names(xml),
            summary,
            pdf_url: pdf_link(xml),
            published: published_date(&published)?,
        },
    })
}

/// Derive the short identifier from an entry URL like
/// `http://arxiv.org/abs/1706.03762v7`.
///
/// Old-style identifiers keep their category prefix (`cond-mat/0102536v1`).
/// Values that do not look like an abs link pass through unchanged.
fn short_id(entry_url: &str) -> String {
    Url::parse(entry_url)
        .ok()
        .and_then(|url| url.path().strip_prefix("/abs/").map(str::to_owned))
        .unwrap_or_else(|| entry_url.to_string())
}

fn published_date(raw: &str) -> IndexResult<NaiveDate> {
    let raw = raw.trim();
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|err| IndexError::feed(format!("invalid <published> date '{raw}': {err}")))
}

/// Collect `<author><name>` values in feed order.
fn author_names(xml: &str) -> Vec<String> {
    xml.split("<author>")
        .skip(1)
        .filter_map(|block| {
            let block = block.find("</author>").map_or(block, |end| &block[..end]);
            tag_text(block, "name")
        })
        .collect()
}

/// Find the href of the `<link title="pdf" .../>` element, if any.
fn pdf_link(xml: &str) -> Option<String> {
    let mut rest = xml;
    while let Some(start) = rest.find("<link") {
        let tag = &rest[start..];
        let end = tag.find('>')?;
        let tag = &tag[..end];
        if attr(tag, "title").as_deref() == Some("pdf") {
            return attr(tag, "href");
        }
        rest = &rest[start + end + 1..];
    }
    None
}

/// Extract a double-quoted attribute value from a raw opening tag.
fn attr(tag: &str, name: &str) -> Option<String> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(unescape(&rest[..end]))
}

/// Extract the text content of the first `<tag>` or `<tag attr="...">` element.
fn tag_text(xml: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut rest = xml;
    loop {
        let start = rest.find(&open)?;
        let after = &rest[start + open.len()..];
        match after.chars().next() {
            // Plain opening tag.
            Some('>') => {
                let body = &after[1..];
                let end = body.find(&close)?;
                return Some(unescape(&body[..end]));
            }
            // Opening tag with attributes.
            Some(c) if c.is_ascii_whitespace() => {
                let gt = after.find('>')?;
                if after[..gt].ends_with('/') {
                    // Self-closing, no text content. Keep scanning.
                    rest = &after[gt + 1..];
                    continue;
                }
                let body = &after[gt + 1..];
                let end = body.find(&close)?;
                return Some(unescape(&body[..end]));
            }
            // Prefix match of a longer tag name, e.g. <id> inside <identifier>.
            _ => rest = &rest[start + open.len()..],
        }
    }
}

/// Collapse runs of whitespace (including newlines) to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the XML entities arXiv feeds actually emit.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match rest.find(';') {
            Some(semi) if semi <= 10 => match decode_entity(&rest[1..semi]) {
                Some(ch) => {
                    out.push(ch);
                    rest = &rest[semi + 1..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            },
            _ => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = if let Some(hex) = num.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                num.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
