pub mod account;
pub mod event;
pub mod event_category;
pub mod event_participant;
pub mod member;
pub mod photo;
pub mod photo_album;
pub mod photo_member;
pub mod photo_tag;
pub mod photo_tag_link;

pub use account::Entity as Account;
pub use event::Entity as Event;
pub use event_category::Entity as EventCategory;
pub use event_participant::Entity as EventParticipant;
pub use member::Entity as Member;
pub use photo::Entity as Photo;
pub use photo_album::Entity as PhotoAlbum;
pub use photo_member::Entity as PhotoMember;
pub use photo_tag::Entity as PhotoTag;
pub use photo_tag_link::Entity as PhotoTagLink;
