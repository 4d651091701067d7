mod favourite_list;
mod result_item;
mod search_bar;
mod search_results;

pub use favourite_list::FavouriteList;
pub use result_item::ResultItem;
pub use search_bar::SearchBar;
pub use search_results::SearchResults;
