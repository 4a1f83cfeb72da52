// Unit UV sphere used (scaled per layer) by the Earth renderer.
// Parameterization matches the equirectangular textures: u wraps west→east,
// v runs pole to pole with v = 0 at the north pole.

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

/// Generate a unit sphere with `lon_segments` × `lat_segments` quads.
/// Triangles wind counter-clockwise seen from outside.
pub fn uv_sphere(lon_segments: u32, lat_segments: u32) -> SphereMesh {
    let lon = lon_segments.max(3);
    let lat = lat_segments.max(2);

    let mut vertices = Vec::with_capacity(((lon + 1) * (lat + 1)) as usize);
    for iy in 0..=lat {
        let v = iy as f32 / lat as f32;
        let theta = v * std::f32::consts::PI;
        for ix in 0..=lon {
            let u = ix as f32 / lon as f32;
            let phi = u * std::f32::consts::TAU;
            let position = [
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ];
            vertices.push(SphereVertex {
                position,
                normal: position,
                uv: [u, v],
            });
        }
    }

    let stride = lon + 1;
    let mut indices = Vec::with_capacity((lon * lat * 6) as usize);
    for iy in 0..lat {
        for ix in 0..lon {
            let a = iy * stride + ix;
            let b = (iy + 1) * stride + ix;
            let c = a + 1;
            let d = b + 1;
            indices.extend_from_slice(&[a, b, d, a, d, c]);
        }
    }

    SphereMesh { vertices, indices }
}
