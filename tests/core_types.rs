use corrdetect::{CorrDetectError, ImageView, OwnedImage, Template};

#[test]
fn image_view_rejects_zero_area() {
    let data = [0u8; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        CorrDetectError::EmptyInput {
            width: 0,
            height: 1,
        }
    );

    let err = ImageView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(
        err,
        CorrDetectError::EmptyInput {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn image_view_rejects_invalid_stride() {
    let data = [0u8; 8];

    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        CorrDetectError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [0u8; 3];

    let err = ImageView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, CorrDetectError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn image_view_rows_skip_padding() {
    let data: Vec<u8> = (0u8..12).collect();
    let view = ImageView::new(&data, 3, 3, 4).unwrap();
    assert_eq!(view.stride(), 4);
    assert_eq!(view.row(1).unwrap(), &[4u8, 5, 6]);
    assert_eq!(view.get(2, 2).copied(), Some(10u8));
    assert!(view.get(3, 0).is_none());

    let rows: Vec<&[u8]> = view.rows().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2], &[8u8, 9, 10]);
}

#[test]
fn owned_image_compacts_strided_views() {
    let data: Vec<u8> = (0u8..12).collect();
    let view = ImageView::new(&data, 3, 3, 4).unwrap();
    let owned = OwnedImage::from_view(view).unwrap();
    assert_eq!(owned.data(), &[0u8, 1, 2, 4, 5, 6, 8, 9, 10]);
    assert_eq!(owned.view().stride(), 3);
}

#[test]
fn owned_image_requires_exact_length() {
    let err = OwnedImage::new(vec![0u8; 5], 2, 2).err().unwrap();
    assert_eq!(
        err,
        CorrDetectError::BufferLengthMismatch {
            expected: 4,
            got: 5,
        }
    );
}

#[test]
fn template_rejects_empty_grid() {
    let err = Template::new(Vec::new(), 0, 0).err().unwrap();
    assert_eq!(
        err,
        CorrDetectError::EmptyInput {
            width: 0,
            height: 0,
        }
    );
}

#[test]
fn template_reports_dimensions() {
    let tpl = Template::new(vec![1u8; 6], 3, 2).unwrap();
    assert_eq!((tpl.width(), tpl.height()), (3, 2));
    assert_eq!(tpl.view().row(1).unwrap(), &[1u8, 1, 1]);
}
