use super::*;

#[test]
fn placeholder_url_follows_service_template() {
    let style =
        PlaceholderStyle { width: 40, height: 40, background: "cccccc", foreground: "333333" };
    assert_eq!(
        placeholder_url(style, "AB"),
        "https://placehold.co/40x40/cccccc/333333?text=AB"
    );
}

#[test]
fn initials_take_first_two_characters_uppercased() {
    assert_eq!(initials("traveler_explorer"), "TR");
    assert_eq!(initials("user1"), "US");
    assert_eq!(initials("x"), "X");
    assert_eq!(initials(""), "");
}

#[test]
fn initials_count_characters_not_bytes() {
    assert_eq!(initials("éclair"), "ÉC");
}

#[test]
fn avatar_placeholder_uses_site_sizing() {
    assert_eq!(
        avatar_placeholder(STORY_AVATAR, "your_story"),
        "https://placehold.co/60x60/cccccc/333333?text=YO"
    );
    assert_eq!(
        avatar_placeholder(POST_AVATAR, "foodie_delights"),
        "https://placehold.co/40x40/cccccc/333333?text=FO"
    );
    assert_eq!(
        avatar_placeholder(SUGGESTION_AVATAR, "suggested_user3"),
        "https://placehold.co/40x40/cccccc/333333?text=SU"
    );
}

#[test]
fn media_placeholder_is_generic_banner() {
    assert_eq!(
        media_placeholder(),
        "https://placehold.co/600x400/cccccc/333333?text=Image+Not+Found"
    );
}

#[test]
fn labels_are_query_safe() {
    let base = "https://placehold.co/40x40/cccccc/333333?text=";
    assert_eq!(placeholder_url(POST_AVATAR, "A&B"), format!("{base}A%26B"));
    assert_eq!(placeholder_url(POST_AVATAR, "É"), format!("{base}%C3%89"));
    assert_eq!(placeholder_url(POST_AVATAR, "a+b=c"), format!("{base}a%2Bb%3Dc"));
    assert_eq!(placeholder_url(POST_AVATAR, "two words"), format!("{base}two+words"));
    assert_eq!(placeholder_url(POST_AVATAR, "u-1_v.2~"), format!("{base}u-1_v.2~"));
}
