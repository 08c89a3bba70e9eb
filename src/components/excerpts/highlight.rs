use log::warn;

use crate::data::{DocumentTable, EntityTable, EntityType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
	Plain(String),
	Highlight { text: String, entity_type: EntityType },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Excerpt {
	pub document: String,
	pub segments: Vec<Segment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
	start: usize,
	end: usize,
	entity_type: EntityType,
}

/// Literal occurrences of each selected entity in `text`, collected over the
/// untouched source. Entities earlier in `selected` win overlaps.
fn collect_spans(text: &str, selected: &[String], entities: &EntityTable) -> Vec<Span> {
	let mut spans: Vec<Span> = Vec::new();
	for id in selected.iter().filter(|id| !id.is_empty()) {
		let Some(record) = entities.get(id) else {
			continue;
		};
		for (start, found) in text.match_indices(id.as_str()) {
			let end = start + found.len();
			if spans.iter().any(|s| start < s.end && s.start < end) {
				continue;
			}
			spans.push(Span {
				start,
				end,
				entity_type: record.entity_type,
			});
		}
	}
	spans.sort_by_key(|s| s.start);
	spans
}

pub fn highlight_text(text: &str, selected: &[String], entities: &EntityTable) -> Vec<Segment> {
	let mut segments = Vec::new();
	let mut cursor = 0;
	for span in collect_spans(text, selected, entities) {
		if span.start > cursor {
			segments.push(Segment::Plain(text[cursor..span.start].to_string()));
		}
		segments.push(Segment::Highlight {
			text: text[span.start..span.end].to_string(),
			entity_type: span.entity_type,
		});
		cursor = span.end;
	}
	if cursor < text.len() {
		segments.push(Segment::Plain(text[cursor..].to_string()));
	}
	segments
}

/// One excerpt per displayed document, in display order. Documents missing
/// from the table are skipped.
pub fn build_excerpts(
	displayed: &[String],
	selected: &[String],
	entities: &EntityTable,
	documents: &DocumentTable,
) -> Vec<Excerpt> {
	displayed
		.iter()
		.filter_map(|doc| {
			let Some(text) = documents.get(doc) else {
				warn!("document {:?} is not in the document table", doc);
				return None;
			};
			Some(Excerpt {
				document: doc.clone(),
				segments: highlight_text(text, selected, entities),
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::fixtures::{record, two_entity_table};

	fn ids(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| s.to_string()).collect()
	}

	fn hl(text: &str, ty: EntityType) -> Segment {
		Segment::Highlight {
			text: text.into(),
			entity_type: ty,
		}
	}

	fn plain(text: &str) -> Segment {
		Segment::Plain(text.into())
	}

	#[test]
	fn wraps_every_occurrence() {
		let table = two_entity_table();
		let segments = highlight_text("A met B, then A left.", &ids(&["A", "B"]), &table);
		assert_eq!(
			segments,
			[
				hl("A", EntityType::Person),
				plain(" met "),
				hl("B", EntityType::Org),
				plain(", then "),
				hl("A", EntityType::Person),
				plain(" left."),
			]
		);
	}

	#[test]
	fn unmatched_text_is_one_plain_segment() {
		let table = two_entity_table();
		assert_eq!(
			highlight_text("nothing here", &ids(&["A"]), &table),
			[plain("nothing here")]
		);
		assert!(highlight_text("", &ids(&["A"]), &table).is_empty());
	}

	#[test]
	fn earlier_selection_wins_overlaps() {
		let mut table = EntityTable::new();
		table.insert("Acme Bank".into(), record(EntityType::Org, &[], &[], 0.0, 0.0));
		table.insert("Bank".into(), record(EntityType::Bank, &[], &[], 0.0, 0.0));
		table.insert("span".into(), record(EntityType::Date, &[], &[], 0.0, 0.0));

		let segments = highlight_text(
			"Acme Bank and the Bank span",
			&ids(&["Acme Bank", "Bank", "span"]),
			&table,
		);
		assert_eq!(
			segments,
			[
				hl("Acme Bank", EntityType::Org),
				plain(" and the "),
				hl("Bank", EntityType::Bank),
				plain(" "),
				hl("span", EntityType::Date),
			]
		);
	}

	#[test]
	fn multibyte_text_splits_on_char_boundaries() {
		let mut table = EntityTable::new();
		table.insert("Zoë".into(), record(EntityType::Person, &[], &[], 0.0, 0.0));
		let segments = highlight_text("« Zoë »", &ids(&["Zoë"]), &table);
		assert_eq!(
			segments,
			[plain("« "), hl("Zoë", EntityType::Person), plain(" »")]
		);
	}

	#[test]
	fn excerpts_follow_display_order_and_skip_missing() {
		let table = two_entity_table();
		let mut documents = DocumentTable::new();
		documents.insert("doc1".into(), "A and B".into());
		documents.insert("doc2".into(), "B alone".into());

		let excerpts = build_excerpts(
			&ids(&["doc2", "lost", "doc1"]),
			&ids(&["B"]),
			&table,
			&documents,
		);
		let order: Vec<&str> = excerpts.iter().map(|e| e.document.as_str()).collect();
		assert_eq!(order, ["doc2", "doc1"]);
		assert_eq!(excerpts[1].segments[1], hl("B", EntityType::Org));
	}
}
