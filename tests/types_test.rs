use serde_json::json;
use spotweb::types::{Album, Artist, Image, Playlist, Scope, Track, User};

#[test]
fn test_empty_object_decodes_to_all_absent_fields() {
    let empty = json!({});

    assert_eq!(Image::from_value(&empty), Image::default());
    assert_eq!(User::from_value(&empty), User::default());
    assert_eq!(Artist::from_value(&empty), Artist::default());
    assert_eq!(Album::from_value(&empty), Album::default());
    assert_eq!(Track::from_value(&empty), Track::default());
    assert_eq!(Playlist::from_value(&empty), Playlist::default());
}

#[test]
fn test_non_object_value_decodes_without_failing() {
    // A body that was not JSON at all reads as Null upstream; decoding
    // still produces a record, just an empty one.
    assert_eq!(User::from_value(&json!(null)), User::default());
    assert_eq!(Track::from_value(&json!("garbage")), Track::default());
    assert_eq!(Playlist::from_value(&json!(42)), Playlist::default());
}

#[test]
fn test_user_decodes_present_fields() {
    let value = json!({
        "country": "SE",
        "display_name": "Alice",
        "email": "alice@example.com",
        "id": "alice",
        "product": "premium",
        "images": [{ "height": 64, "width": 64, "url": "https://img/a.jpg" }]
    });

    let user = User::from_value(&value);

    assert_eq!(user.country.as_deref(), Some("SE"));
    assert_eq!(user.display_name.as_deref(), Some("Alice"));
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert_eq!(user.id.as_deref(), Some("alice"));
    assert_eq!(user.product.as_deref(), Some("premium"));

    let images = user.images.expect("images should be present");
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].height, Some(64));
    assert_eq!(images[0].url.as_deref(), Some("https://img/a.jpg"));
}

#[test]
fn test_empty_images_array_is_present_and_empty() {
    let user = User::from_value(&json!({ "id": "alice", "images": [] }));
    assert_eq!(user.images, Some(vec![]));
}

#[test]
fn test_missing_images_key_is_absent() {
    let user = User::from_value(&json!({ "id": "alice" }));
    assert_eq!(user.images, None);
}

#[test]
fn test_mistyped_fields_decode_to_absent() {
    let image = Image::from_value(&json!({ "height": "tall", "width": 64, "url": 7 }));
    assert_eq!(image.height, None);
    assert_eq!(image.width, Some(64));
    assert_eq!(image.url, None);

    let user = User::from_value(&json!({ "display_name": 42, "images": "none" }));
    assert_eq!(user.display_name, None);
    assert_eq!(user.images, None);
}

#[test]
fn test_track_decodes_nested_album_and_artists() {
    let value = json!({
        "id": "t1",
        "name": "Song",
        "preview_url": "https://p/t1.mp3",
        "uri": "spotify:track:t1",
        "album": {
            "id": "a1",
            "name": "Record",
            "images": [{ "url": "https://img/cover.jpg" }]
        },
        "artists": [
            { "id": "ar1", "name": "Band" },
            { "name": "Guest" }
        ]
    });

    let track = Track::from_value(&value);

    assert_eq!(track.id.as_deref(), Some("t1"));
    assert_eq!(track.preview_url.as_deref(), Some("https://p/t1.mp3"));

    let album = track.album.expect("album should be present");
    assert_eq!(album.id.as_deref(), Some("a1"));
    assert_eq!(album.images.map(|images| images.len()), Some(1));

    let artists = track.artists.expect("artists should be present");
    assert_eq!(artists.len(), 2);
    assert_eq!(artists[0].id.as_deref(), Some("ar1"));
    assert_eq!(artists[1].id, None);
    assert_eq!(artists[1].name.as_deref(), Some("Guest"));
}

#[test]
fn test_track_without_album_key_has_absent_album() {
    let track = Track::from_value(&json!({ "id": "t1" }));
    assert_eq!(track.album, None);
    assert_eq!(track.artists, None);

    // A mistyped album reads as absent too.
    let track = Track::from_value(&json!({ "id": "t1", "album": "a1" }));
    assert_eq!(track.album, None);
}

#[test]
fn test_scope_wire_values() {
    let expected = [
        (Scope::PlaylistReadPrivate, "playlist-read-private"),
        (Scope::PlaylistModifyPrivate, "playlist-modify-private"),
        (Scope::PlaylistModifyPublic, "playlist-modify-public"),
        (Scope::Streaming, "streaming"),
        (Scope::UserFollowModify, "user-follow-modify"),
        (Scope::UserFollowRead, "user-follow-read"),
        (Scope::UserLibraryRead, "user-library-read"),
        (Scope::UserLibraryModify, "user-library-modify"),
        (Scope::UserReadPrivate, "user-read-private"),
        (Scope::UserReadBirthdate, "user-read-birthdate"),
        (Scope::UserReadEmail, "user-read-email"),
    ];

    for (scope, wire) in expected {
        assert_eq!(scope.as_str(), wire);
        assert_eq!(scope.to_string(), wire);
    }
}
