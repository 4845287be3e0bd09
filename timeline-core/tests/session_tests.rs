use timeline_core::{ButtonKind, Interaction, PostId, Session};

#[test]
fn seeded_feed_renders_three_cards_off() {
    let session = Session::with_seed();
    let view = session.render();

    assert_eq!(view.cards.len(), 3);
    let ids: Vec<&str> = view.cards.iter().map(|c| c.post_id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert!(view
        .cards
        .iter()
        .all(|c| !c.engagement.liked && !c.engagement.reposted));
}

#[test]
fn clicking_like_then_rerender_updates_only_that_card() {
    let mut session = Session::with_seed();
    let before = session.render();

    // Simulate the surface: take the action carried by the like button of card 1
    let action = before.cards[0]
        .engagement
        .button(ButtonKind::Like)
        .and_then(|b| b.action.clone())
        .expect("like button is actionable");
    assert!(session.dispatch(&action));

    let after = session.render();
    assert!(after.cards[0].engagement.liked);
    assert!(!after.cards[0].engagement.reposted);
    assert_eq!(after.cards[1], before.cards[1]);
    assert_eq!(after.cards[2], before.cards[2]);
}

#[test]
fn repost_twice_is_off_again() {
    let mut session = Session::with_seed();
    session.dispatch(&Interaction::ToggleRepost(PostId::from("1")));
    session.dispatch(&Interaction::ToggleRepost(PostId::from("1")));
    assert!(!session.engagement().is_reposted("1"));
    assert!(!session.render().cards[0].engagement.reposted);
}

#[test]
fn unknown_id_is_accepted() {
    let mut session = Session::with_seed();
    assert!(session.dispatch(&Interaction::ToggleLike(PostId::from("not-in-feed"))));
    assert!(session.engagement().is_liked("not-in-feed"));
    // Cards for the seeded posts are unaffected
    assert!(session.render().cards.iter().all(|c| !c.engagement.liked));
}

#[test]
fn every_pair_is_independent() {
    let ids = ["1", "2", "3", "x"];
    for target in ids {
        for like in [true, false] {
            let mut session = Session::with_seed();
            let interaction = if like {
                Interaction::ToggleLike(PostId::from(target))
            } else {
                Interaction::ToggleRepost(PostId::from(target))
            };
            session.dispatch(&interaction);

            let state = session.engagement();
            for other in ids {
                let expect_like = like && other == target;
                let expect_repost = !like && other == target;
                assert_eq!(state.is_liked(other), expect_like, "liked {other} after {interaction:?}");
                assert_eq!(state.is_reposted(other), expect_repost, "reposted {other} after {interaction:?}");
            }
        }
    }
}
