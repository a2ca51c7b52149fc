// 该文件是 Lianpu （脸谱） 项目的一部分。
// src/output/draw.rs - 人脸检测结果可视化
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::detector::{Face, Point};

// 标注样式常量
const BOX_COLOR: [u8; 3] = [255, 0, 0]; // 红色
const BOX_THICKNESS: i32 = 3;
const MARKER_COLOR: [u8; 3] = [255, 0, 0]; // 红色
const MARKER_RADIUS: i32 = 3;

pub struct Draw {
  box_color: Rgb<u8>,
  box_thickness: i32,
  marker_color: Rgb<u8>,
  marker_radius: i32,
}

impl Default for Draw {
  fn default() -> Self {
    Self {
      box_color: Rgb(BOX_COLOR),
      box_thickness: BOX_THICKNESS,
      marker_color: Rgb(MARKER_COLOR),
      marker_radius: MARKER_RADIUS,
    }
  }
}

impl Draw {
  /// 在图像上就地绘制所有检测到的人脸
  pub fn draw_faces(&self, image: &mut RgbImage, faces: &[Face]) {
    for face in faces {
      self.draw_face(image, face);
    }
  }

  fn draw_face(&self, image: &mut RgbImage, face: &Face) {
    self.draw_bbox(image, face);

    let keypoints = face.keypoints;
    let points = [
      keypoints.left_eye,
      keypoints.right_eye,
      keypoints.nose,
      keypoints.left_mouth,
      keypoints.right_mouth,
    ];
    for point in points {
      self.draw_marker(image, point);
    }
  }

  // 绘制人脸矩形边框，角点先夹取到图像范围内
  fn draw_bbox(&self, image: &mut RgbImage, face: &Face) {
    let (w, h) = (image.width() as i32, image.height() as i32);
    if w < 1 || h < 1 {
      return;
    }

    let x_min = (face.bbox.upper_left.x as i32).clamp(0, w - 1);
    let y_min = (face.bbox.upper_left.y as i32).clamp(0, h - 1);
    let x_max = (face.bbox.lower_right.x as i32).clamp(0, w - 1);
    let y_max = (face.bbox.lower_right.y as i32).clamp(0, h - 1);
    if x_min >= x_max || y_min >= y_max {
      return;
    }

    // 边框向内加粗
    for t in 0..self.box_thickness {
      let width = x_max - x_min - 2 * t;
      let height = y_max - y_min - 2 * t;
      if width <= 0 || height <= 0 {
        break;
      }
      let rect = Rect::at(x_min + t, y_min + t).of_size(width as u32, height as u32);
      draw_hollow_rect_mut(image, rect, self.box_color);
    }
  }

  // 关键点画成实心圆加轮廓圆，离图像超过一个半径的点跳过
  fn draw_marker(&self, image: &mut RgbImage, point: Point) {
    let r = self.marker_radius as i64;
    let x = point.x as i64;
    let y = point.y as i64;
    if x < -r || y < -r || x >= image.width() as i64 + r || y >= image.height() as i64 + r {
      return;
    }

    let center = (x as i32, y as i32);
    draw_filled_circle_mut(image, center, self.marker_radius, self.marker_color);
    draw_hollow_circle_mut(image, center, self.marker_radius, self.marker_color);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detector::{Bbox, FaceKeypoints};
  use image::ImageBuffer;

  const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
  const RED: Rgb<u8> = Rgb([255, 0, 0]);

  fn white_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_pixel(width, height, WHITE)
  }

  fn face(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Face {
    let center = Point {
      x: (x_min + x_max) / 2.0,
      y: (y_min + y_max) / 2.0,
    };
    Face {
      probability: 0.9,
      bbox: Bbox {
        upper_left: Point { x: x_min, y: y_min },
        lower_right: Point { x: x_max, y: y_max },
      },
      keypoints: FaceKeypoints {
        left_eye: center,
        right_eye: center,
        nose: center,
        left_mouth: center,
        right_mouth: center,
      },
    }
  }

  #[test]
  fn draws_box_border_and_keypoints() {
    let mut image = white_image(100, 100);
    let draw = Draw::default();
    draw.draw_faces(&mut image, &[face(10.0, 20.0, 60.0, 80.0)]);

    // 边框像素被染红（三层厚度）
    assert_eq!(*image.get_pixel(10, 20), RED);
    assert_eq!(*image.get_pixel(11, 21), RED);
    assert_eq!(*image.get_pixel(12, 22), RED);
    // 边框内侧像素未被污染
    assert_eq!(*image.get_pixel(15, 30), WHITE);
    // 关键点中心在框中央，被实心圆覆盖
    assert_eq!(*image.get_pixel(35, 50), RED);
    // 框外像素保持原样
    assert_eq!(*image.get_pixel(5, 5), WHITE);
    assert_eq!(*image.get_pixel(99, 99), WHITE);
  }

  #[test]
  fn no_faces_leaves_image_untouched() {
    let mut image = white_image(32, 32);
    let reference = image.clone();
    Draw::default().draw_faces(&mut image, &[]);
    assert_eq!(image, reference);
  }

  #[test]
  fn out_of_bounds_coordinates_are_clipped_without_panic() {
    let mut image = white_image(40, 40);
    let draw = Draw::default();
    // 框一部分在图像外
    draw.draw_faces(&mut image, &[face(-10.0, -10.0, 20.0, 20.0)]);
    // 完全在图像外
    draw.draw_faces(&mut image, &[face(100.0, 100.0, 200.0, 200.0)]);

    // 可见部分仍被绘制
    assert_eq!(*image.get_pixel(19, 5), RED);
  }

  #[test]
  fn extreme_coordinates_are_clamped_to_the_image_edge() {
    let mut image = white_image(32, 32);
    let mut f = face(f32::MIN, f32::MIN, f32::MAX, f32::MAX);
    // 关键点远超 i32 能表示的范围
    let far = Point { x: 3.0e9, y: 3.0e9 };
    f.keypoints = FaceKeypoints {
      left_eye: far,
      right_eye: far,
      nose: far,
      left_mouth: far,
      right_mouth: far,
    };
    Draw::default().draw_faces(&mut image, &[f]);

    // 边框夹到图像边缘
    assert_eq!(*image.get_pixel(0, 0), RED);
    assert_eq!(*image.get_pixel(30, 30), RED);
    // 关键点太远，不绘制
    assert_eq!(*image.get_pixel(16, 16), WHITE);
  }

  #[test]
  fn degenerate_box_draws_nothing() {
    let mut image = white_image(32, 32);
    let reference = image.clone();
    let mut f = face(10.0, 10.0, 10.0, 10.0);
    // 关键点也移到图像外，隔离退化框本身的行为
    let outside = Point { x: -50.0, y: -50.0 };
    f.keypoints = FaceKeypoints {
      left_eye: outside,
      right_eye: outside,
      nose: outside,
      left_mouth: outside,
      right_mouth: outside,
    };
    Draw::default().draw_faces(&mut image, &[f]);
    assert_eq!(image, reference);
  }
}
