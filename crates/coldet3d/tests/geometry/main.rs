mod enclosing_volumes;
mod frustum_culling;
mod point_in_triangle;
mod sphere_sweep;
mod volume_pairs;
