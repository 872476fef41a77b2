use crate::cache::ImageCache;
use crate::config::RenderOptions;
use crate::test_utils::{blockquote, heading, paragraph, render, render_with_cache};
use crate::testing::{DrawOp, TestImage, TestSurface};
use placard_doc::{DocNode, HeadingLevel, NodeKind};
use placard_types::{FontWeight, TextAlign};

fn text_op(surface: &TestSurface, needle: &str) -> (f32, f32, f32, FontWeight) {
    match surface.find_text(needle) {
        Some(DrawOp::Text { x, y, size, weight, .. }) => (*x, *y, *size, *weight),
        other => panic!("no text op for '{}', got {:?}", needle, other),
    }
}

#[test]
fn heading_sizes_follow_scale_table() {
    // base 14: h1..h5 -> 35, 28, 21, 18, 14
    let expected = [
        (HeadingLevel::H1, 35.0),
        (HeadingLevel::H2, 28.0),
        (HeadingLevel::H3, 21.0),
        (HeadingLevel::H4, 18.0),
        (HeadingLevel::H5, 14.0),
    ];
    for (level, size) in expected {
        let (surface, _) = render(&heading(level, "Hi"), &RenderOptions::default());
        let (_, _, drawn, weight) = text_op(&surface, "Hi");
        assert_eq!(drawn, size, "{:?}", level);
        assert_eq!(weight, FontWeight::Bold);
    }
}

#[test]
fn title_then_paragraph_lands_at_expected_rows() {
    // "# Title\n\nHello world" on a 400x200 surface: heading line at the
    // top, body text 12px of heading gap below the 35px line.
    let mut doc = heading(HeadingLevel::H1, "Title");
    doc.extend(paragraph("Hello world"));
    let (surface, report) = render(&doc, &RenderOptions::default());

    let (x, y, size, weight) = text_op(&surface, "Title");
    assert_eq!((x, y - size), (0.0, 0.0));
    assert_eq!(size, 35.0);
    assert_eq!(weight, FontWeight::Bold);

    let (x, y, size, weight) = text_op(&surface, "Hello");
    assert_eq!(size, 14.0);
    assert_eq!(weight, FontWeight::Normal);
    assert_eq!((x, y - size), (0.0, 47.0));

    // "Hello " advances six half-em glyphs before "world".
    let (x, _, _, _) = text_op(&surface, "world");
    assert_eq!(x, 42.0);

    // 35 (heading) + 12 (gap) + 14 (body) + 8 (paragraph gap)
    assert_eq!(report.content_height, 69.0);
}

#[test]
fn words_wrap_at_first_overflowing_word() {
    // Surface 400 wide; each word plus its trailing space is 49px at size
    // 14, so eight fit (392px) and the ninth wraps. The break is between
    // words, never mid-word.
    let words = vec!["aaaaaa"; 10].join(" ");
    let (surface, _) = render(&paragraph(&words), &RenderOptions::default());

    let rows: Vec<f32> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { y, .. } => Some(*y),
            _ => None,
        })
        .collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows.iter().filter(|y| **y == 14.0).count(), 8);
    assert_eq!(rows.iter().filter(|y| **y == 28.0).count(), 2);
}

#[test]
fn line_height_is_tallest_inline_element() {
    let cache = ImageCache::new();
    cache.insert("https://e.com/a.png", TestImage::new(40.0, 40.0));

    let doc = vec![DocNode::text("hi"), DocNode::image("https://e.com/a.png", "")];
    let (_, report) = render_with_cache(&doc, &RenderOptions::default(), &cache);

    // Text contributes 14, the image 40: the committed line is 40 tall.
    assert_eq!(report.content_height, 40.0);
}

#[test]
fn tall_images_shrink_to_max_height() {
    let cache = ImageCache::new();
    cache.insert("https://e.com/tall.png", TestImage::new(100.0, 400.0));

    let opts = RenderOptions { max_image_height: 100.0, ..Default::default() };
    let doc = vec![DocNode::image("https://e.com/tall.png", "")];
    let (surface, report) = render_with_cache(&doc, &opts, &cache);

    match surface.ops.iter().find(|op| matches!(op, DrawOp::Image { .. })) {
        Some(DrawOp::Image { dest, .. }) => {
            assert_eq!(dest.height, 100.0);
            assert_eq!(dest.width, 25.0);
        }
        other => panic!("expected image op, got {:?}", other),
    }
    assert_eq!(report.content_height, 100.0);
}

#[test]
fn blockquote_shades_under_its_line() {
    let (surface, _) = render(&blockquote("hi"), &RenderOptions::default());

    // Band and bar first, sized to the committed line, then the text.
    match &surface.ops[0] {
        DrawOp::Rect { rect, .. } => {
            assert_eq!(rect.height, 14.0);
            assert_eq!(rect.width, 400.0);
        }
        other => panic!("expected band, got {:?}", other),
    }
    assert!(matches!(&surface.ops[1], DrawOp::Rect { rect, .. } if rect.width == 4.0));
    assert!(matches!(&surface.ops[2], DrawOp::Text { .. }));

    // The closing token clears the flag: text after the quote is unshaded.
    let mut doc = blockquote("hi");
    doc.extend(paragraph("after"));
    let (surface, _) = render(&doc, &RenderOptions::default());
    let rects = surface
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Rect { .. }))
        .count();
    assert_eq!(rects, 2);
}

#[test]
fn blockquote_tokens_shade_without_block_flags() {
    // Some parsers emit the quote delimiters as plain inline tokens; the
    // open/close arms commit on their own, so the quoted line is still
    // shaded and the text before the quote is not.
    let doc = vec![
        DocNode::text("before"),
        DocNode::new(NodeKind::BlockquoteOpen),
        DocNode::text("hi"),
        DocNode::new(NodeKind::BlockquoteClose),
    ];
    let (surface, _) = render(&doc, &RenderOptions::default());

    let rects = surface
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Rect { .. }))
        .count();
    assert_eq!(rects, 2);

    // "before" commits unshaded on its own line; "hi" lands below it.
    let (_, y_before, _, _) = text_op(&surface, "before");
    let (_, y_hi, _, _) = text_op(&surface, "hi");
    assert_eq!(y_before, 14.0);
    assert_eq!(y_hi, 28.0);
    assert!(matches!(&surface.ops[1], DrawOp::Rect { .. }));
}

#[test]
fn list_close_mid_line_commits_before_unindenting() {
    // A close token with no block flag must not snap the cursor left over
    // content already placed on the line.
    let doc = vec![
        DocNode::block(NodeKind::ListItemOpen),
        DocNode::text("item"),
        DocNode::new(NodeKind::ListItemClose),
        DocNode::text("tail"),
    ];
    let (surface, _) = render(&doc, &RenderOptions::default());

    let (x_item, y_item, _, _) = text_op(&surface, "item");
    let (x_tail, y_tail, _, _) = text_op(&surface, "tail");
    assert_eq!((x_item, x_tail), (20.0, 0.0));
    assert!(y_tail > y_item);
}

#[test]
fn soft_break_honors_policy() {
    let doc = vec![
        DocNode::text("one"),
        DocNode::new(NodeKind::SoftBreak),
        DocNode::text("two"),
    ];

    let (surface, _) = render(&doc, &RenderOptions::default());
    let (_, y_two, _, _) = text_op(&surface, "two");
    assert_eq!(y_two - 14.0, 14.0);

    let opts = RenderOptions { use_breaks: false, ..Default::default() };
    let (surface, _) = render(&doc, &opts);
    let (_, y_two, _, _) = text_op(&surface, "two");
    assert_eq!(y_two - 14.0, 0.0);
}

#[test]
fn hard_break_always_breaks() {
    let doc = vec![
        DocNode::text("one"),
        DocNode::new(NodeKind::HardBreak),
        DocNode::text("two"),
    ];
    let opts = RenderOptions { use_breaks: false, ..Default::default() };
    let (surface, _) = render(&doc, &opts);
    let (_, y_two, _, _) = text_op(&surface, "two");
    assert_eq!(y_two - 14.0, 14.0);
}

#[test]
fn emphasis_and_strong_toggle_style() {
    let doc = vec![
        DocNode::new(NodeKind::StrongOpen),
        DocNode::text("bold"),
        DocNode::new(NodeKind::StrongClose),
        DocNode::new(NodeKind::EmphasisOpen),
        DocNode::text("slanted"),
        DocNode::new(NodeKind::EmphasisClose),
        DocNode::text("plain"),
    ];
    let (surface, _) = render(&doc, &RenderOptions::default());

    assert!(matches!(
        surface.find_text("bold"),
        Some(DrawOp::Text { weight: FontWeight::Bold, italic: false, .. })
    ));
    assert!(matches!(
        surface.find_text("slanted"),
        Some(DrawOp::Text { weight: FontWeight::Normal, italic: true, .. })
    ));
    assert!(matches!(
        surface.find_text("plain"),
        Some(DrawOp::Text { weight: FontWeight::Normal, italic: false, .. })
    ));
}

#[test]
fn nested_list_indent_restores_per_level() {
    let doc = vec![
        DocNode::block(NodeKind::ListItemOpen),
        DocNode::text("outer"),
        DocNode::block(NodeKind::ListItemOpen),
        DocNode::text("inner"),
        DocNode::block(NodeKind::ListItemClose),
        DocNode::block(NodeKind::ListItemClose),
        DocNode::text("free"),
    ];
    let (surface, _) = render(&doc, &RenderOptions::default());

    let (x, ..) = text_op(&surface, "outer");
    assert_eq!(x, 20.0);
    let (x, ..) = text_op(&surface, "inner");
    assert_eq!(x, 40.0);
    // Both closes popped: text after the list starts at the left edge.
    let (x, ..) = text_op(&surface, "free");
    assert_eq!(x, 0.0);

    // Bullets sit at each item's leading edge.
    let bullets: Vec<f32> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, x, .. } if text == "\u{2022}" => Some(*x),
            _ => None,
        })
        .collect();
    assert_eq!(bullets, vec![0.0, 20.0]);
}

#[test]
fn rule_strokes_mid_gap_across_render_width() {
    let doc = vec![DocNode::block(NodeKind::Rule)];
    let (surface, report) = render(&doc, &RenderOptions::default());

    match surface.ops.iter().find(|op| matches!(op, DrawOp::Line { .. })) {
        Some(DrawOp::Line { from, to, width, .. }) => {
            assert_eq!(*from, (0.0, 4.0));
            assert_eq!(*to, (400.0, 4.0));
            assert_eq!(*width, 1.0);
        }
        other => panic!("expected line op, got {:?}", other),
    }
    assert_eq!(report.content_height, 8.0);
}

#[test]
fn comments_draw_nothing() {
    let doc = vec![
        DocNode::text("<!-- secret -->"),
        DocNode::text("[comment]: <> (note)"),
    ];
    let (surface, report) = render(&doc, &RenderOptions::default());
    assert!(surface.ops.is_empty());
    assert_eq!(report.content_height, 0.0);
}

#[test]
fn image_shorthand_in_text_is_an_image() {
    let cache = ImageCache::new();
    cache.insert("https://e.com/pic.png", TestImage::new(30.0, 30.0));

    let doc = vec![DocNode::text("![](https://e.com/pic.png)")];
    let (surface, _) = render_with_cache(&doc, &RenderOptions::default(), &cache);
    assert!(surface.ops.iter().any(|op| matches!(op, DrawOp::Image { .. })));
}

#[test]
fn embedded_keys_resolve_through_the_map() {
    let cache = ImageCache::new();
    cache.insert("https://cdn.example/logo.png", TestImage::new(20.0, 20.0));

    let mut opts = RenderOptions::default();
    opts.embedded_images
        .insert("logo".to_string(), "https://cdn.example/logo.png".to_string());

    let doc = vec![DocNode::image("logo", "the logo")];
    let (surface, report) = render_with_cache(&doc, &opts, &cache);
    assert!(surface.ops.iter().any(|op| matches!(op, DrawOp::Image { .. })));
    assert!(report.missing_images.is_empty());
}

#[test]
fn unknown_embedded_key_degrades_silently() {
    let doc = vec![DocNode::image("nope", "")];
    let (surface, report) = render(&doc, &RenderOptions::default());
    assert!(surface.ops.is_empty());
    // Nothing to load either: the key resolves to no URI at all.
    assert!(report.missing_images.is_empty());
}

#[test]
fn duplicate_cache_misses_report_once() {
    let doc = vec![
        DocNode::image("https://e.com/a.png", ""),
        DocNode::image("https://e.com/a.png", ""),
        DocNode::image("https://e.com/b.png", ""),
    ];
    let (_, report) = render(&doc, &RenderOptions::default());
    assert_eq!(
        report.missing_images,
        vec![
            "https://e.com/a.png".to_string(),
            "https://e.com/b.png".to_string()
        ]
    );
}

#[test]
fn centered_text_offsets_by_content_extent() {
    let opts = RenderOptions { text_align: TextAlign::Center, ..Default::default() };
    // "abcd" is four half-em glyphs: 28px of content on a 400px surface.
    let (surface, _) = render(&[DocNode::text("abcd")], &opts);
    let (x, ..) = text_op(&surface, "abcd");
    assert_eq!(x, 186.0);
}

#[test]
fn margins_narrow_the_render_width() {
    let opts = RenderOptions {
        margin: crate::config::Margins { left: 50.0, right: 50.0, top: 0.0, bottom: 0.0 },
        ..Default::default()
    };
    // 300px usable: six 49px spaced words per line, the seventh wraps.
    let words = vec!["aaaaaa"; 8].join(" ");
    let (surface, _) = render(&paragraph(&words), &opts);

    let xs: Vec<f32> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { x, y, .. } if *y == 28.0 => Some(*x),
            _ => None,
        })
        .collect();
    // The wrapped words start back at the left margin.
    assert_eq!(xs, vec![50.0, 99.0]);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let cache = ImageCache::new();
    cache.insert("https://e.com/a.png", TestImage::new(24.0, 24.0));
    let mut doc = heading(HeadingLevel::H2, "Again");
    doc.extend(paragraph("some body text that wraps around the surface edge"));
    doc.push(DocNode::image("https://e.com/a.png", ""));
    doc.extend(blockquote("quoted"));

    let (first, _) = render_with_cache(&doc, &RenderOptions::default(), &cache);
    let (second, _) = render_with_cache(&doc, &RenderOptions::default(), &cache);
    assert_eq!(first.ops, second.ops);
}

#[test]
fn unrecognized_kinds_are_ignored_but_still_break_lines() {
    let doc = vec![
        DocNode::text("one"),
        DocNode::block(NodeKind::Other("custom-block".to_string())),
        DocNode::text("two"),
    ];
    let (surface, _) = render(&doc, &RenderOptions::default());
    let (_, y_two, _, _) = text_op(&surface, "two");
    assert_eq!(y_two - 14.0, 14.0);
}
