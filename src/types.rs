use serde::Serialize;
use serde_json::Value;

/// OAuth permission scopes accepted by the authorization server.
///
/// The string values are a wire contract; they are sent verbatim in the
/// `scope` parameter of the authorization URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Read access to a user's private playlists.
    PlaylistReadPrivate,
    /// Write access to a user's private playlists.
    PlaylistModifyPrivate,
    /// Write access to a user's public playlists.
    PlaylistModifyPublic,
    /// Streaming music permission.
    Streaming,
    UserFollowModify,
    UserFollowRead,
    UserLibraryRead,
    UserLibraryModify,
    /// Read access to the user's subscription details.
    UserReadPrivate,
    /// Read access to the user's birthdate.
    UserReadBirthdate,
    /// Read access to the user's email address.
    UserReadEmail,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::PlaylistReadPrivate => "playlist-read-private",
            Scope::PlaylistModifyPrivate => "playlist-modify-private",
            Scope::PlaylistModifyPublic => "playlist-modify-public",
            Scope::Streaming => "streaming",
            Scope::UserFollowModify => "user-follow-modify",
            Scope::UserFollowRead => "user-follow-read",
            Scope::UserLibraryRead => "user-library-read",
            Scope::UserLibraryModify => "user-library-modify",
            Scope::UserReadPrivate => "user-read-private",
            Scope::UserReadBirthdate => "user-read-birthdate",
            Scope::UserReadEmail => "user-read-email",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Album or user artwork.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Image {
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub url: Option<String>,
}

impl Image {
    pub fn from_value(value: &Value) -> Self {
        Image {
            height: int_field(value, "height"),
            width: int_field(value, "width"),
            url: string_field(value, "url"),
        }
    }
}

/// A Spotify user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    pub country: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub id: Option<String>,
    pub product: Option<String>,
    pub images: Option<Vec<Image>>,
}

impl User {
    pub fn from_value(value: &Value) -> Self {
        User {
            country: string_field(value, "country"),
            display_name: string_field(value, "display_name"),
            email: string_field(value, "email"),
            id: string_field(value, "id"),
            product: string_field(value, "product"),
            images: image_list(value),
        }
    }
}

/// A track or album artist.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Artist {
    pub id: Option<String>,
    pub name: Option<String>,
    pub uri: Option<String>,
}

impl Artist {
    pub fn from_value(value: &Value) -> Self {
        Artist {
            id: string_field(value, "id"),
            name: string_field(value, "name"),
            uri: string_field(value, "uri"),
        }
    }
}

/// An album, as embedded in track responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Album {
    pub id: Option<String>,
    pub name: Option<String>,
    pub uri: Option<String>,
    pub images: Option<Vec<Image>>,
}

impl Album {
    pub fn from_value(value: &Value) -> Self {
        Album {
            id: string_field(value, "id"),
            name: string_field(value, "name"),
            uri: string_field(value, "uri"),
            images: image_list(value),
        }
    }
}

/// A full track record, owning its album and artists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: Option<String>,
    pub preview_url: Option<String>,
    pub uri: Option<String>,
    pub album: Option<Album>,
    pub artists: Option<Vec<Artist>>,
}

impl Track {
    pub fn from_value(value: &Value) -> Self {
        Track {
            id: string_field(value, "id"),
            name: string_field(value, "name"),
            preview_url: string_field(value, "preview_url"),
            uri: string_field(value, "uri"),
            album: value
                .get("album")
                .filter(|album| album.is_object())
                .map(Album::from_value),
            artists: value
                .get("artists")
                .and_then(Value::as_array)
                .map(|artists| artists.iter().map(Artist::from_value).collect()),
        }
    }
}

/// A playlist, as returned by the list and create endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Playlist {
    pub id: Option<String>,
    pub uri: Option<String>,
    pub name: Option<String>,
}

impl Playlist {
    pub fn from_value(value: &Value) -> Self {
        Playlist {
            id: string_field(value, "id"),
            uri: string_field(value, "uri"),
            name: string_field(value, "name"),
        }
    }
}

// Field accessors shared by the decoders above. A missing key or a value
// of the wrong type reads as absent; decoding never fails.

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn int_field(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_i64)
}

// An empty `images` array is a present-but-empty list; only a missing or
// mistyped key reads as absent.
fn image_list(value: &Value) -> Option<Vec<Image>> {
    value
        .get("images")
        .and_then(Value::as_array)
        .map(|images| images.iter().map(Image::from_value).collect())
}
