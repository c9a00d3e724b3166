mod dither;
mod noise;
