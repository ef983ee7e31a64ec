//! Feed data model and the built-in sample data set.
//!
//! Every value here is defined once at load and never mutated. Ids are only
//! used as list-rendering keys and are unique within their own list.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

/// An entry in the story tray.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Story {
    pub id: u32,
    pub user: String,
    pub avatar: String,
}

/// A comment owned by its parent [`Post`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub user: String,
    pub text: String,
}

/// A single feed entry.
///
/// `comments` are kept in display order (oldest first, as authored).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub username: String,
    pub avatar: String,
    pub image: String,
    pub caption: String,
    pub likes: u64,
    pub comments: Vec<Comment>,
    /// Relative time label, already formatted for display.
    pub time: String,
}

/// A suggested account shown in the suggestions panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub id: u32,
    pub user: String,
    pub avatar: String,
    /// Mutual-connection descriptor, e.g. "Followed by user_b".
    pub mutual: String,
}

/// The signed-in account summarized at the top of the suggestions panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
    pub display_name: String,
    pub avatar: String,
}

/// Everything the home screen renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedState {
    pub stories: Vec<Story>,
    pub posts: Vec<Post>,
    pub suggestions: Vec<Suggestion>,
    pub current_user: CurrentUser,
}

impl FeedState {
    /// The hardcoded sample data shown by the app.
    pub fn sample() -> Self {
        Self {
            stories: sample_stories(),
            posts: sample_posts(),
            suggestions: sample_suggestions(),
            current_user: CurrentUser {
                username: "your_username".to_owned(),
                display_name: "Your Name".to_owned(),
                avatar: "https://placehold.co/60x60/a0c49d/ffffff?text=You".to_owned(),
            },
        }
    }
}

fn story(id: u32, user: &str, avatar: &str) -> Story {
    Story { id, user: user.to_owned(), avatar: avatar.to_owned() }
}

fn comment(user: &str, text: &str) -> Comment {
    Comment { user: user.to_owned(), text: text.to_owned() }
}

fn suggestion(id: u32, user: &str, avatar: &str, mutual: &str) -> Suggestion {
    Suggestion {
        id,
        user: user.to_owned(),
        avatar: avatar.to_owned(),
        mutual: mutual.to_owned(),
    }
}

fn sample_stories() -> Vec<Story> {
    vec![
        story(1, "your_story", "https://placehold.co/60x60/a0c49d/ffffff?text=You"),
        story(2, "user1", "https://placehold.co/60x60/ffadad/ffffff?text=U1"),
        story(3, "user2", "https://placehold.co/60x60/ffd6a5/ffffff?text=U2"),
        story(4, "user3", "https://placehold.co/60x60/fdffb6/ffffff?text=U3"),
        story(5, "user4", "https://placehold.co/60x60/caffbf/ffffff?text=U4"),
        story(6, "user5", "https://placehold.co/60x60/9bf6ff/ffffff?text=U5"),
        story(7, "user6", "https://placehold.co/60x60/a0c49d/ffffff?text=U6"),
        story(8, "user7", "https://placehold.co/60x60/ffadad/ffffff?text=U7"),
    ]
}

fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            username: "traveler_explorer".to_owned(),
            avatar: "https://placehold.co/60x60/8d99ae/ffffff?text=TE".to_owned(),
            image: "https://placehold.co/600x400/2b2d42/ffffff?text=Beautiful+Landscape"
                .to_owned(),
            caption: "Exploring the breathtaking mountains! What an incredible view. \
                      #mountains #nature #travel"
                .to_owned(),
            likes: 1234,
            comments: vec![
                comment("adventure_seeker", "Amazing shot!"),
                comment("nature_lover", "Wish I was there!"),
            ],
            time: "2 hours ago".to_owned(),
        },
        Post {
            id: 2,
            username: "foodie_delights".to_owned(),
            avatar: "https://placehold.co/60x60/edf2f4/000000?text=FD".to_owned(),
            image: "https://placehold.co/600x400/8d99ae/ffffff?text=Delicious+Food".to_owned(),
            caption: "Homemade pasta night! So delicious and comforting. 🍝 \
                      #pasta #homemade #foodlover"
                .to_owned(),
            likes: 876,
            comments: vec![
                comment("chef_master", "Looks divine!"),
                comment("hungry_palate", "Recipe please!"),
            ],
            time: "5 hours ago".to_owned(),
        },
        Post {
            id: 3,
            username: "urban_photography".to_owned(),
            avatar: "https://placehold.co/60x60/d90429/ffffff?text=UP".to_owned(),
            image: "https://placehold.co/600x400/ef233c/ffffff?text=City+Lights".to_owned(),
            caption: "City lights at dusk. The energy is palpable. \
                      #citylife #photography #nightphotography"
                .to_owned(),
            likes: 2100,
            comments: vec![
                comment("shutterbug", "Stunning capture!"),
                comment("city_dweller", "My favorite view!"),
            ],
            time: "1 day ago".to_owned(),
        },
    ]
}

fn sample_suggestions() -> Vec<Suggestion> {
    vec![
        suggestion(
            1,
            "suggested_user1",
            "https://placehold.co/40x40/d4a373/ffffff?text=SU1",
            "Followed by user_a + 2 more",
        ),
        suggestion(
            2,
            "suggested_user2",
            "https://placehold.co/40x40/e9edc9/000000?text=SU2",
            "Followed by user_b",
        ),
        suggestion(
            3,
            "suggested_user3",
            "https://placehold.co/40x40/faedcd/000000?text=SU3",
            "New to Instagram",
        ),
        suggestion(
            4,
            "suggested_user4",
            "https://placehold.co/40x40/d6ccc2/000000?text=SU4",
            "Followed by user_c",
        ),
    ]
}
