mod category;
mod client;
mod product;
mod role;
mod user;
