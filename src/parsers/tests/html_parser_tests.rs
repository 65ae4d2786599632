use crate::error::Error;
use crate::metadata::Tag;
use crate::parsers::html::{parse_image_page, parse_tag_text};

const IMAGE_PAGE: &str = r#"
<html>
<body>
  <div id="main">
    <div class="image">
      <img src="/system/images_images/000/012/345/original.png" alt="">
    </div>
    <div class="tags">
      <a class="label" href="/tags/comedy">Comedy</a>
      <a class="label" href="/pairings/a_x_b">Pairing: A x B</a>
      <a class="label" href="/authors/jane">Author:  Jane </a>
    </div>
  </div>
</body>
</html>
"#;

#[test]
fn test_parse_image_page() {
    let doc = parse_image_page(IMAGE_PAGE).unwrap();
    assert_eq!(doc.src, "/system/images_images/000/012/345/original.png");
    assert_eq!(
        doc.tags,
        vec![
            Tag::new("General", "Comedy"),
            Tag::new("Pairing", "A x B"),
            Tag::new("Author", "Jane"),
        ]
    );
    assert_eq!(doc.title(), "Image: Comedy, A x B, Jane");
}

#[test]
fn test_parse_tag_text() {
    assert_eq!(parse_tag_text("Pairing: A x B"), Tag::new("Pairing", "A x B"));
    assert_eq!(parse_tag_text("  Yuri  "), Tag::new("General", "Yuri"));
    // Only the first colon splits
    assert_eq!(
        parse_tag_text("General: Re: Zero"),
        Tag::new("General", "Re: Zero")
    );
}

#[test]
fn test_tags_outside_container_are_ignored() {
    let html = r#"
        <div class="image"><img src="/a.png"></div>
        <a href="/nav">Home</a>
        <div class="tags"><a>Drama</a></div>
    "#;
    let doc = parse_image_page(html).unwrap();
    assert_eq!(doc.tags, vec![Tag::new("General", "Drama")]);
}

#[test]
fn test_empty_tags_container() {
    let html = r#"<div class="image"><img src="/a.png"></div><div class="tags"></div>"#;
    let doc = parse_image_page(html).unwrap();
    assert!(doc.tags.is_empty());
    assert_eq!(doc.title(), "Image: ");
}

#[test]
fn test_missing_image_container() {
    let html = r#"<div class="tags"><a>Drama</a></div>"#;
    let err = parse_image_page(html).unwrap_err();
    assert!(matches!(err, Error::UpstreamParse(_)));
}

#[test]
fn test_missing_img_src() {
    let html = r#"<div class="image"><img alt="x"></div><div class="tags"></div>"#;
    let err = parse_image_page(html).unwrap_err();
    assert!(matches!(err, Error::UpstreamParse(_)));
}

#[test]
fn test_missing_tags_container() {
    let html = r#"<div class="image"><img src="/a.png"></div>"#;
    let err = parse_image_page(html).unwrap_err();
    assert!(matches!(err, Error::UpstreamParse(_)));
}

#[test]
fn test_inner_whitespace_is_kept() {
    let html = r#"
        <div class="image"><img src="/a.png"></div>
        <div class="tags">
            <a>  Pairing:  A  x  B  </a>
            <a>
                Drama
            </a>
            <a>   </a>
        </div>
    "#;
    let doc = parse_image_page(html).unwrap();
    assert_eq!(
        doc.tags,
        vec![Tag::new("Pairing", "A  x  B"), Tag::new("General", "Drama")]
    );
}
