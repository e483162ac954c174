mod binarize;
mod diffusion;
