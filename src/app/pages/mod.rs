mod about;
mod home;
mod reports;
