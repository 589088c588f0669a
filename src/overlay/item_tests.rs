//! Tests for the search item model

use super::*;

fn sample_post() -> Post {
    Post {
        id: 42,
        title: "Hello <em>world</em>".to_string(),
        published_at: None,
        author_name: Some("Ada".to_string()),
        featured_image_url: None,
        format: PostFormat::Video,
        canonical_path: "/posts/hello-world/".to_string(),
    }
}

#[test]
fn test_post_navigates_to_canonical_path_verbatim() {
    let item = SearchItem::Post(sample_post());
    // The live query text is irrelevant for post results
    assert_eq!(item.navigation_target("hello"), "/posts/hello-world/");
}

#[test]
fn test_quick_action_appends_live_query_text() {
    let item = SearchItem::QuickAction {
        label: "Search posts",
        target_prefix: "/search/posts/",
    };
    assert_eq!(item.navigation_target("rust"), "/search/posts/rust");
    assert_eq!(item.navigation_target(""), "/search/posts/");
}

#[test]
fn test_recommended_navigates_verbatim() {
    let item = SearchItem::Recommended {
        label: "Travel".to_string(),
        target_path: "/topics/travel/".to_string(),
    };
    assert_eq!(item.navigation_target("ignored"), "/topics/travel/");
}

#[test]
fn test_quick_actions_fixed_set_of_four() {
    let actions = quick_actions();
    assert_eq!(actions.len(), 4);

    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Search posts",
            "Filter posts by",
            "Search authors",
            "Search categories"
        ]
    );

    // Every quick action is a refinement: its target ends where the query begins
    for action in &actions {
        let target = action.navigation_target("q");
        assert!(target.ends_with('q'), "unexpected target {target:?}");
    }
}

#[test]
fn test_recommended_searches_from_config() {
    let entries = vec![
        RecommendedEntry {
            title: "Photography".to_string(),
            url: None,
        },
        RecommendedEntry {
            title: "Travel".to_string(),
            url: Some("/topics/travel/".to_string()),
        },
    ];

    let items = recommended_searches(&entries);
    assert_eq!(items.len(), 2);

    // Missing URL falls back to the posts search page for the title
    assert_eq!(
        items[0].navigation_target(""),
        "/search/posts/Photography"
    );
    assert_eq!(items[1].navigation_target(""), "/topics/travel/");
}

#[test]
fn test_empty_recommended_config_is_valid() {
    assert!(recommended_searches(&[]).is_empty());
}

#[test]
fn test_post_format_from_slug() {
    assert_eq!(PostFormat::from_slug("gallery"), PostFormat::Gallery);
    assert_eq!(PostFormat::from_slug("post-format-video"), PostFormat::Video);
    assert_eq!(PostFormat::from_slug("post-format-audio"), PostFormat::Audio);
    assert_eq!(PostFormat::from_slug("standard"), PostFormat::Standard);
    // Unknown slugs fall back to Standard
    assert_eq!(PostFormat::from_slug("aside"), PostFormat::Standard);
    assert_eq!(PostFormat::from_slug(""), PostFormat::Standard);
}

#[test]
fn test_post_format_glyphs_distinct() {
    let glyphs = [
        PostFormat::Standard.glyph(),
        PostFormat::Gallery.glyph(),
        PostFormat::Video.glyph(),
        PostFormat::Audio.glyph(),
    ];
    for (i, a) in glyphs.iter().enumerate() {
        for b in glyphs.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
