pub mod about;
pub mod books;
pub mod dont_press;
pub mod feed;
pub mod notifications;
pub mod theme;
