use anyhow::{Context, Result};
use essentials::{debug, info};
use http::{header, HeaderValue, Method, StatusCode};
use router::{Arguments, Handler, Param, Request, Response, Router};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "router-demo", about = "Dispatch a single request against the demo routes")]
struct Opt {
    /// HTTP method of the request
    #[structopt(short, long, env = "ROUTER_METHOD", default_value = "GET")]
    method: String,

    /// Library family the request is attributed to
    #[structopt(short, long, env = "ROUTER_FAMILY", default_value = "http")]
    family: String,

    /// Request path, e.g. /hello/world
    path: String,
}

fn routes() -> Router<Response> {
    let mut router = Router::new();
    router.map(
        "GET /hello/{name}",
        Handler::new([Param::Arg, Param::Response], |args: Arguments| {
            let name = args.text(0).unwrap_or_default();
            args.response()
                .cloned()
                .unwrap_or_default()
                .with_body(format!("Hello, {name}!"))
        }),
    );
    router.map(
        "GET /tags/{tag}",
        Handler::new([Param::Args, Param::Response], |args: Arguments| {
            let tags = args.list(0).unwrap_or_default().join(",");
            args.response().cloned().unwrap_or_default().with_body(tags)
        }),
    );
    router.map(
        "(?:GET|HEAD) /status",
        Handler::new([Param::Request, Param::Response], |args: Arguments| {
            let method = args
                .request()
                .map(|request| request.method.to_string())
                .unwrap_or_default();
            args.response()
                .cloned()
                .unwrap_or_default()
                .with_status(StatusCode::NO_CONTENT)
                .with_header(header::ALLOW, HeaderValue::from_static("GET, HEAD"))
                .with_body(method)
        }),
    );
    router
}

fn main() -> Result<()> {
    essentials::install();
    let opt = Opt::from_args();
    debug!("Options: {:?}", opt);
    let method: Method = opt
        .method
        .parse()
        .with_context(|| format!("Invalid method {}", opt.method))?;
    let request = Request::new(method, opt.path).with_family(opt.family);
    let router = routes();
    let response = router
        .dispatch(&request)
        .with_context(|| format!("Failed to dispatch {}", request.subject()))?;
    info!("{} -> {}", request.subject(), response.status);
    println!("{}", String::from_utf8_lossy(response.body()));
    Ok(())
}
