mod attach_collections;
mod get_outlet_collection;
