//! Off-page guidance
//!
//! Advice on what to do after publishing: links, social reach, authority.
//! None of it affects the score; it only branches on whether the item has
//! related articles, an author profile and citations.

use crate::models::{
    ContentItem, OffPageCategory, OffPagePriority, OffPageRecommendation,
};

/// Build off-page recommendations for an item.
///
/// Order is fixed: link building, social signals, authority building,
/// content distribution.
pub fn off_page_guidance(item: &ContentItem) -> Vec<OffPageRecommendation> {
    vec![
        link_building(item),
        social_signals(item),
        authority_building(item),
        content_distribution(),
    ]
}

fn recommendation(
    id: &str,
    category: OffPageCategory,
    priority: OffPagePriority,
    title: &str,
    description: String,
    steps: &[&str],
) -> OffPageRecommendation {
    OffPageRecommendation {
        id: id.to_string(),
        category,
        title: title.to_string(),
        description,
        actionable: true,
        steps: steps.iter().map(|s| s.to_string()).collect(),
        priority,
    }
}

fn link_building(item: &ContentItem) -> OffPageRecommendation {
    match item.related_count() {
        0 => recommendation(
            "internal-linking",
            OffPageCategory::LinkBuilding,
            OffPagePriority::High,
            "Build internal links",
            "The article links to no related articles. Internal links spread authority and keep readers on the site.".to_string(),
            &[
                "Pick 3-5 related articles on the same topic",
                "Link to them from relevant paragraphs with descriptive anchor text",
                "Add a link back to this article from the most related older pieces",
            ],
        ),
        n => recommendation(
            "cross-promote-related",
            OffPageCategory::LinkBuilding,
            OffPagePriority::Medium,
            "Cross-promote related articles",
            format!("The article links to {n} related articles. Make the links two-way."),
            &[
                "Update each related article to link back here",
                "Group the pieces into a topic hub page",
            ],
        ),
    }
}

fn social_signals(item: &ContentItem) -> OffPageRecommendation {
    match item.og_author() {
        None => recommendation(
            "author-attribution",
            OffPageCategory::SocialSignals,
            OffPagePriority::Medium,
            "Add author attribution for social sharing",
            "No article:author is set, so social cards show no author.".to_string(),
            &[
                "Set the author's public profile URL as the Open Graph article author",
                "Make sure the author page lists the author's social profiles",
            ],
        ),
        Some(author) => recommendation(
            "author-amplification",
            OffPageCategory::SocialSignals,
            OffPagePriority::Low,
            "Share through the author's profiles",
            format!("Ask {author} to share the article on their own channels."),
            &[
                "Share within the first hour of publishing",
                "Pin the post on the author's profile for a week",
            ],
        ),
    }
}

fn authority_building(item: &ContentItem) -> OffPageRecommendation {
    match item.citation_count() {
        0 => recommendation(
            "cite-sources",
            OffPageCategory::AuthorityBuilding,
            OffPagePriority::High,
            "Cite authoritative sources",
            "The article cites no sources. Citations support expertise and trust signals.".to_string(),
            &[
                "Link claims and statistics to primary sources",
                "Prefer official, academic or government publications",
            ],
        ),
        n => recommendation(
            "source-outreach",
            OffPageCategory::AuthorityBuilding,
            OffPagePriority::Medium,
            "Reach out to cited sources",
            format!("The article cites {n} sources. Let them know; some will link back."),
            &[
                "Send a short note to each cited author or organization",
                "Offer a quote or summary they can reuse",
            ],
        ),
    }
}

fn content_distribution() -> OffPageRecommendation {
    recommendation(
        "content-distribution",
        OffPageCategory::ContentDistribution,
        OffPagePriority::Medium,
        "Content distribution strategy",
        "Plan where the article goes after it is published.".to_string(),
        &[
            "Share on the brand's social channels",
            "Include it in the next newsletter",
            "Submit it to relevant communities and aggregators",
            "Repurpose key points into short posts or a video",
        ],
    )
}
