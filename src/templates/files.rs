//! Template file contents
//!
//! Opaque payloads written verbatim into the generated project. These are
//! JavaScript and dotenv sources, not rendered templates; nothing in them
//! is substituted.

/// `.env` file with the port and database connection string defaults
pub const ENV_FILE: &str = "PORT=5000\nMONGO_URI=mongodb://localhost:27017/mydb";

/// `index.js` server entrypoint
///
/// Wires Express with CORS, JSON body parsing, cookie parsing, and the
/// `/api` route group. The server starts listening only after the MongoDB
/// connection succeeds; on failure it logs the error and never listens.
pub const SERVER_INDEX: &str = r#"import express from "express";
import mongoose from "mongoose";
import cors from "cors";
import dotenv from "dotenv";
import cookieParser from "cookie-parser";
import userRoutes from "./routes/user.routes.js";

dotenv.config();
const app = express();
app.use(cors());
app.use(express.json());
app.use(cookieParser());
app.use("/api", userRoutes);

mongoose.connect(process.env.MONGO_URI)
  .then(() => app.listen(process.env.PORT, () => console.log("🚀 Server running on port", process.env.PORT)))
  .catch((err) => console.error("❌ MongoDB Error:", err));
  "#;

/// `models/user.model.js` Mongoose schema
///
/// Four declared fields plus automatic creation/update timestamps.
pub const USER_MODEL: &str = r#"import mongoose from "mongoose";
const userSchema = new mongoose.Schema({
  username: String,
  email: String,
  password: String,
  phoneNumber: String
}, { timestamps: true });

export default mongoose.model("User", userSchema);
  "#;

/// `controllers/user.controller.js` creation handler
///
/// Hashes the password with bcrypt before persisting and returns the
/// created record as the response payload.
pub const USER_CONTROLLER: &str = r#"import User from "../models/user.model.js";
import bcrypt from "bcryptjs";

export const createUser = async (req, res) => {
  const { username, email, password, phoneNumber } = req.body;
  const hashedPassword = await bcrypt.hash(password, 10);
  const newUser = new User({ username, email, password: hashedPassword, phoneNumber });
  await newUser.save();
  res.json({ message: "✅ User Created", user: newUser });
};
  "#;

/// `routes/user.routes.js` route table binding the creation endpoint
pub const USER_ROUTES: &str = r#"import express from "express";
import { createUser } from "../controllers/user.controller.js";
const router = express.Router();

router.post("/user", createUser);
export default router;
"#;
