mod check;
mod page;
