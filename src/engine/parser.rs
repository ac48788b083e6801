//! Parser for the world definition language.
//!
//! Grammar:
//!
//! ```text
//! program  :  <camera> (<material>)* (<sphere>)*
//! camera   :  camera origin <f32> <f32> <f32> aspect <f32> ;
//! material :  material <name> : <type> ;
//! type     :  Diffuse color <f32> <f32> <f32>
//!          |  Metal color <f32> <f32> <f32> fuzz <f32>
//! sphere   :  sphere center <f32> <f32> <f32> radius <f32> material <name> ;
//! ```

use std::collections::HashMap;

use glam::Vec3;

use super::camera::Camera;
use super::scene::{Material, Scene, Sphere, World};
use crate::error::WorldLoadError;

/// Parse a complete world definition.
///
/// The entire source must be consumed; trailing garbage is as much an error
/// as a truncated declaration.
pub fn parse_world(source: &str) -> Result<World, WorldLoadError> {
    if source.trim().is_empty() {
        return Err(WorldLoadError::EmptySource);
    }

    let mut cursor = Cursor::new(source);
    let camera = parse_camera(&mut cursor)?;

    let mut materials = HashMap::new();
    while cursor.peek("material") {
        let (name, material) = parse_material(&mut cursor)?;
        materials.insert(name, material);
    }

    let mut spheres = Vec::new();
    while cursor.peek("sphere") {
        spheres.push(parse_sphere(&mut cursor, &materials)?);
    }

    if !cursor.at_end() {
        return Err(cursor.error());
    }

    Ok(World {
        camera,
        scene: Scene { spheres },
    })
}

fn parse_camera(cursor: &mut Cursor) -> Result<Camera, WorldLoadError> {
    cursor.expect("camera")?;
    cursor.expect("origin")?;
    let origin = cursor.vec3()?;
    cursor.expect("aspect")?;
    let aspect = cursor.float()?;
    cursor.expect(";")?;
    Ok(Camera::at(origin, aspect))
}

fn parse_material<'a>(cursor: &mut Cursor<'a>) -> Result<(&'a str, Material), WorldLoadError> {
    cursor.expect("material")?;
    let name = cursor.identifier()?;
    cursor.expect(":")?;

    let material = if cursor.peek("Diffuse") {
        cursor.expect("Diffuse")?;
        cursor.expect("color")?;
        let color = cursor.vec3()?;
        Material::Diffuse { color }
    } else if cursor.peek("Metal") {
        cursor.expect("Metal")?;
        cursor.expect("color")?;
        let color = cursor.vec3()?;
        cursor.expect("fuzz")?;
        let fuzz = cursor.float()?;
        Material::Metal { color, fuzz }
    } else {
        return Err(cursor.error());
    };

    cursor.expect(";")?;
    Ok((name, material))
}

fn parse_sphere(
    cursor: &mut Cursor,
    materials: &HashMap<&str, Material>,
) -> Result<Sphere, WorldLoadError> {
    cursor.expect("sphere")?;
    cursor.expect("center")?;
    let center = cursor.vec3()?;
    cursor.expect("radius")?;
    let radius = cursor.float()?;
    cursor.expect("material")?;
    let name = cursor.identifier()?;
    let material = *materials
        .get(name)
        .ok_or_else(|| WorldLoadError::UnknownMaterial(name.to_string()))?;
    cursor.expect(";")?;
    Ok(Sphere {
        center,
        radius,
        material,
    })
}

/// Whitespace-skipping view over the remaining source.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            rest: source.trim_start(),
        }
    }

    fn at_end(&self) -> bool {
        self.rest.is_empty()
    }

    fn peek(&self, token: &str) -> bool {
        self.rest.starts_with(token)
    }

    fn error(&self) -> WorldLoadError {
        WorldLoadError::malformed(self.rest)
    }

    fn expect(&mut self, token: &str) -> Result<(), WorldLoadError> {
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest.trim_start();
                Ok(())
            }
            None => Err(self.error()),
        }
    }

    fn identifier(&mut self) -> Result<&'a str, WorldLoadError> {
        let end = self
            .rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(self.rest.len());
        if end == 0 {
            return Err(self.error());
        }
        let (name, rest) = self.rest.split_at(end);
        self.rest = rest.trim_start();
        Ok(name)
    }

    fn float(&mut self) -> Result<f32, WorldLoadError> {
        let mut end = 0;
        for (index, c) in self.rest.char_indices() {
            let part_of_number = c.is_ascii_digit() || c == '.' || (c == '-' && index == 0);
            if !part_of_number {
                break;
            }
            end = index + c.len_utf8();
        }
        let value = self.rest[..end].parse().map_err(|_| self.error())?;
        self.rest = self.rest[end..].trim_start();
        Ok(value)
    }

    fn vec3(&mut self) -> Result<Vec3, WorldLoadError> {
        let x = self.float()?;
        let y = self.float()?;
        let z = self.float()?;
        Ok(Vec3::new(x, y, z))
    }
}
