mod accounts;
mod comments;
mod watchlists;
