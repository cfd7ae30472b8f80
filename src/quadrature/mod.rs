// Quadrature rules, one file per rule family. Each file contributes an
// inherent impl block on `SampleTable`.

mod newton;
mod rectangle;
mod simpson;
mod trapezoid;
