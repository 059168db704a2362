mod common;
mod royalties;
