pub mod compare_angles;
