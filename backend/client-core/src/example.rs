/// Sample component loaded into the source buffer by "load example".
pub const EXAMPLE_SOURCE: &str = r#"function Welcome() {
  return (
    <div className="welcome-container">
      <h1 className="title" style={{color: 'blue', fontSize: '24px'}}>
        Hello, Webflow!
      </h1>
      <button onClick={() => alert('clicked')} className="btn-primary">
        Click me
      </button>
    </div>
  );
}"#;
