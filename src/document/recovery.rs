// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Salvage of PDFs cut short by the download cap
//!
//! A PDF keeps its cross-reference table and trailer at the end of the file,
//! so a truncated download cannot be loaded as is. `rebuild_prefix` copies
//! every complete `N G obj ... endobj` block of the prefix into a new file
//! with a fresh xref table and trailer. When the catalog was cut off, a new
//! one is pointed at the root of the page tree. Pages whose objects were
//! lost are skipped when the page tree is walked.

use std::collections::BTreeMap;

const OBJ: &[u8] = b"obj";
const ENDOBJ: &[u8] = b"endobj";
const STREAM: &[u8] = b"stream";
const ENDSTREAM: &[u8] = b"endstream";

struct RawObject<'a> {
    generation: u16,
    /// The whole block, from the object number through `endobj`
    block: &'a [u8],
}

/// Rebuild a loadable PDF from the complete objects of a truncated one
///
/// Returns `None` if `data` is not a PDF or holds no usable page tree.
pub fn rebuild_prefix(data: &[u8]) -> Option<Vec<u8>> {
    let header = header_line(data)?;
    let objects = scan_objects(data);

    let mut out = Vec::with_capacity(data.len() + objects.len() * 24 + 128);
    out.extend_from_slice(header);

    let mut offsets: BTreeMap<u32, (usize, u16)> = BTreeMap::new();
    for (&id, object) in &objects {
        offsets.insert(id, (out.len(), object.generation));
        out.extend_from_slice(object.block);
        out.push(b'\n');
    }

    let root = match find_object(&objects, |block| contains(block, b"/Catalog")) {
        Some(id) => (id, objects[&id].generation),
        None => {
            let pages = find_object(&objects, is_page_tree_root)?;
            let id = objects.keys().next_back().copied()? + 1;
            offsets.insert(id, (out.len(), 0));
            out.extend_from_slice(
                format!(
                    "{} 0 obj\n<< /Type /Catalog /Pages {} {} R >>\nendobj\n",
                    id, pages, objects[&pages].generation
                )
                .as_bytes(),
            );
            (id, 0)
        }
    };

    let xref_start = out.len();
    out.extend_from_slice(b"xref\n");
    for (id, (offset, generation)) in &offsets {
        out.extend_from_slice(format!("{} 1\n{:010} {:05} n\r\n", id, offset, generation).as_bytes());
    }
    let size = offsets.keys().next_back().map_or(1, |id| id + 1);
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root {} {} R >>\nstartxref\n{}\n%%EOF\n",
            size, root.0, root.1, xref_start
        )
        .as_bytes(),
    );

    Some(out)
}

/// `%PDF-x.y` plus its line ending
fn header_line(data: &[u8]) -> Option<&[u8]> {
    if !data.starts_with(b"%PDF-") {
        return None;
    }
    let eol = data.iter().position(|&b| b == b'\n' || b == b'\r')?;
    let end = if data[eol] == b'\r' && data.get(eol + 1) == Some(&b'\n') {
        eol + 2
    } else {
        eol + 1
    };
    Some(&data[..end])
}

/// Complete indirect objects in file order; later definitions win
fn scan_objects(data: &[u8]) -> BTreeMap<u32, RawObject<'_>> {
    let mut objects = BTreeMap::new();
    let mut cursor = 0;

    while let Some(found) = find(data, OBJ, cursor) {
        let after = found + OBJ.len();
        let header = object_header(data, found).filter(|_| is_token_end(data.get(after)));

        let Some((start, id, generation)) = header else {
            cursor = after;
            continue;
        };
        // An object without its end means the cut fell inside it
        let Some(end) = object_end(data, after) else {
            break;
        };

        objects.insert(
            id,
            RawObject {
                generation,
                block: &data[start..end],
            },
        );
        cursor = end;
    }

    objects
}

/// Parse `<id> <generation>` ending right before the `obj` keyword at `obj_pos`
fn object_header(data: &[u8], obj_pos: usize) -> Option<(usize, u32, u16)> {
    let gen_end = back_while(data, obj_pos, |b| b.is_ascii_whitespace());
    let gen_start = back_while(data, gen_end, |b| b.is_ascii_digit());
    let id_end = back_while(data, gen_start, |b| b.is_ascii_whitespace());
    let id_start = back_while(data, id_end, |b| b.is_ascii_digit());

    if gen_start == gen_end || id_end == gen_start || id_start == id_end {
        return None;
    }
    if id_start > 0 && !data[id_start - 1].is_ascii_whitespace() {
        return None;
    }

    let id = parse_number(&data[id_start..id_end])?;
    let generation = parse_number(&data[gen_start..gen_end])?;
    Some((id_start, id, generation))
}

/// Index just past the `endobj` closing the object whose body starts at `from`
fn object_end(data: &[u8], from: usize) -> Option<usize> {
    let endobj = find(data, ENDOBJ, from)?;
    // Stream data may contain anything, so skip to `endstream` first
    let end = match find(&data[..endobj], STREAM, from) {
        Some(stream) => {
            let endstream = find(data, ENDSTREAM, stream + STREAM.len())?;
            find(data, ENDOBJ, endstream + ENDSTREAM.len())?
        }
        None => endobj,
    };
    Some(end + ENDOBJ.len())
}

fn find_object<F>(objects: &BTreeMap<u32, RawObject<'_>>, predicate: F) -> Option<u32>
where
    F: Fn(&[u8]) -> bool,
{
    objects
        .iter()
        .find(|(_, object)| predicate(object.block))
        .map(|(&id, _)| id)
}

fn is_page_tree_root(block: &[u8]) -> bool {
    (contains(block, b"/Type/Pages") || contains(block, b"/Type /Pages"))
        && !contains(block, b"/Parent")
}

fn is_token_end(byte: Option<&u8>) -> bool {
    matches!(byte, Some(b) if b.is_ascii_whitespace() || b"<[(/%".contains(b))
}

fn back_while<F>(data: &[u8], end: usize, predicate: F) -> usize
where
    F: Fn(u8) -> bool,
{
    let mut index = end;
    while index > 0 && predicate(data[index - 1]) {
        index -= 1;
    }
    index
}

fn parse_number<T: std::str::FromStr>(digits: &[u8]) -> Option<T> {
    std::str::from_utf8(digits).ok()?.parse().ok()
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|position| position + from)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle, 0).is_some()
}
