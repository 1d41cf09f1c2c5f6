mod create_outlet;
mod create_staff;
mod get_outlet;
mod link_outlet;
