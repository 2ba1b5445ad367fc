//! Tests for bracket tag notation parsing.

use omni_chronicle::{count_tags, is_valid_tag, parse_tag, parse_tags};

#[test]
fn test_parse_single_tag() {
    let tags = parse_tags("[L:Entrance | Foreboding]");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].type_code, "L");
    assert_eq!(tags[0].identifier, "Entrance");
    assert_eq!(tags[0].data, "Foreboding");
    assert_eq!(tags[0].raw_text, "[L:Entrance | Foreboding]");
}

#[test]
fn test_parse_tag_without_data() {
    let tags = parse_tags("We met [N:Old Man 2] at the gate.");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].identifier, "Old Man 2");
    assert_eq!(tags[0].data, "");
}

#[test]
fn test_whitespace_around_delimiters_is_trimmed() {
    let tags = parse_tags("[ N :  Bartender |  Friendly; Knowledgeable  ]");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].type_code, "N");
    assert_eq!(tags[0].identifier, "Bartender");
    assert_eq!(tags[0].data, "Friendly; Knowledgeable");
    assert_eq!(
        tags[0].raw_text,
        "[ N :  Bartender |  Friendly; Knowledgeable  ]"
    );
    assert_eq!(tags[0].data_fields(), vec!["Friendly", "Knowledgeable"]);
}

#[test]
fn test_tags_in_source_order() {
    let text = "The party left [L:Town] and met [N:Guard | Alert].\nLater [Q:Rescue | Find the heir].";
    let tags = parse_tags(text);
    let ids: Vec<&str> = tags.iter().map(|t| t.identifier.as_str()).collect();
    assert_eq!(ids, vec!["Town", "Guard", "Rescue"]);
}

#[test]
fn test_missing_colon_is_skipped() {
    let tags = parse_tags("[just a bracket] then [N:Guard] and [link](http://example.com)");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].identifier, "Guard");
}

#[test]
fn test_unterminated_tag_is_skipped() {
    assert!(parse_tags("[N:Guard | Alert").is_empty());
    assert!(parse_tags("trailing [L:").is_empty());
}

#[test]
fn test_inner_open_bracket_belongs_to_outer_token() {
    let tags = parse_tags("[N:Open | still typing [L:Inn | Cozy]");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].type_code, "N");
    assert_eq!(tags[0].identifier, "Open");
    assert_eq!(tags[0].data, "still typing [L:Inn | Cozy");
    assert_eq!(tags[0].raw_text, "[N:Open | still typing [L:Inn | Cozy]");
}

#[test]
fn test_open_bracket_inside_identifier() {
    let tags = parse_tags("[N:Guard [x] | Alert]");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].type_code, "N");
    assert_eq!(tags[0].identifier, "Guard [x");
    assert_eq!(tags[0].data, "");
    assert_eq!(tags[0].raw_text, "[N:Guard [x]");
}

#[test]
fn test_exact_token_stops_at_first_closing_bracket() {
    let tag = parse_tag("[N:Open | note [L:Inn]").unwrap();
    assert_eq!(tag.data, "note [L:Inn");
    assert!(parse_tag("[N:Guard [x] | Alert]").is_none());
}

#[test]
fn test_first_closing_bracket_terminates() {
    let tags = parse_tags("[N:Guard | Alert] trailing]");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].data, "Alert");
}

#[test]
fn test_empty_fields_are_not_tags() {
    assert!(parse_tags("[:Nameless]").is_empty());
    assert!(parse_tags("[N:]").is_empty());
    assert!(parse_tags("[N: | only data]").is_empty());
}

#[test]
fn test_extra_pipes_belong_to_data() {
    let tags = parse_tags("[I:Sword | sharp | heavy]");
    assert_eq!(tags[0].identifier, "Sword");
    assert_eq!(tags[0].data, "sharp | heavy");
}

#[test]
fn test_empty_content() {
    assert!(parse_tags("").is_empty());
    assert_eq!(count_tags(""), 0);
}

#[test]
fn test_count_tags() {
    assert_eq!(count_tags("[N:A] [N:A] [L:B | x] [bad]"), 3);
}

#[test]
fn test_parse_exact_token() {
    let tag = parse_tag("  [N:Guard | Alert]  ").unwrap();
    assert_eq!(tag.identifier, "Guard");
    assert_eq!(tag.raw_text, "[N:Guard | Alert]");

    assert!(parse_tag("[N:Guard] and more").is_none());
    assert!(parse_tag("no tag").is_none());
}

#[test]
fn test_is_valid_tag() {
    assert!(is_valid_tag("[L:Dungeon | Explored; Closed]"));
    assert!(is_valid_tag("[L:Dungeon]"));
    assert!(!is_valid_tag("[Dungeon]"));
    assert!(!is_valid_tag("[L:Dungeon"));
}

#[test]
fn test_parse_is_idempotent() {
    let text = "[N:Bartender | Friendly]\n[N:Bartender | Friendly; Knowledgeable]";
    assert_eq!(parse_tags(text), parse_tags(text));
}
