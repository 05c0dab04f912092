pub mod map_to_fractal_space;
