use crate::post::{Author, Block, EngagementCounts, PostBody, PostId, PostRecord, VideoDescriptor};

const SANTIAGO_UPLOAD: &str = "assets/uploads/38f3892d-3b50-4831-a39b-1e74eaf05f4f.png";

const MCP_TOPICS: &[&str] = &[
    "Introduction to the protocol",
    "Why do we need it?",
    "Protocol architecture",
    "MCP Server and Client primitives",
    "An MCP demo",
];

/// Posts compiled into the program, in display order.
pub fn seed_posts() -> Vec<PostRecord> {
    vec![
        PostRecord {
            id: PostId::from("1"),
            author: Author {
                name: "Santiago".into(),
                handle: "svpino".into(),
                verified: true,
                avatar: Some(SANTIAGO_UPLOAD.into()),
            },
            timestamp: "3h".into(),
            body: PostBody::Rich(vec![
                Block::Paragraph("MCP is an absolute game-changer.".into()),
                Block::Paragraph(
                    "Yesterday, I taught a 2-hour session about MCP covering the following topics:"
                        .into(),
                ),
                Block::OrderedList(MCP_TOPICS.iter().map(|s| s.to_string()).collect()),
                Block::Paragraph("Here is the full 2-hour video, free".into()),
                Block::ShowMore,
            ]),
            video: Some(VideoDescriptor {
                thumbnail: SANTIAGO_UPLOAD.into(),
                duration: "2:23:16".into(),
                channel_name: "Santiago Valdarrama".into(),
            }),
            counts: EngagementCounts::new("13", "23", "272", "10K"),
        },
        PostRecord {
            id: PostId::from("2"),
            author: Author {
                name: "Developer".into(),
                handle: "developer".into(),
                verified: false,
                avatar: None,
            },
            timestamp: "5h".into(),
            body: PostBody::Plain(
                "Just shipped a new feature using the MCP protocol. The developer experience is incredible! 🚀"
                    .into(),
            ),
            video: None,
            counts: EngagementCounts::new("8", "12", "45", "1.2K"),
        },
        PostRecord {
            id: PostId::from("3"),
            author: Author {
                name: "Tech News".into(),
                handle: "technews".into(),
                verified: true,
                avatar: None,
            },
            timestamp: "1d".into(),
            body: PostBody::Plain(
                "Breaking: New AI protocol revolutionizes how applications communicate. Early adopters report 10x improvement in development speed."
                    .into(),
            ),
            video: None,
            counts: EngagementCounts::new("156", "892", "2.1K", "25K"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_ids_are_unique_and_ordered() {
        let posts = seed_posts();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn only_first_post_has_video_and_avatar() {
        let posts = seed_posts();
        assert!(posts[0].video.is_some());
        assert!(posts[0].author.avatar.is_some());
        assert!(posts[1..].iter().all(|p| p.video.is_none() && p.author.avatar.is_none()));
    }

    #[test]
    fn first_post_lists_five_topics() {
        let posts = seed_posts();
        let PostBody::Rich(blocks) = &posts[0].body else {
            panic!("expected rich body");
        };
        let items = blocks
            .iter()
            .find_map(|b| match b {
                Block::OrderedList(items) => Some(items.len()),
                _ => None,
            })
            .unwrap_or_default();
        assert_eq!(items, 5);
        assert_eq!(blocks.last(), Some(&Block::ShowMore));
    }
}
