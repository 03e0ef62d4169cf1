pub mod jquery_file_tree;
